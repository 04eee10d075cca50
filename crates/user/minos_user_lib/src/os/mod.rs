pub mod minos;
