pub mod mna;
