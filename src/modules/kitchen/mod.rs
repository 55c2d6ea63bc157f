pub mod facade;
