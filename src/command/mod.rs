pub mod pin;
