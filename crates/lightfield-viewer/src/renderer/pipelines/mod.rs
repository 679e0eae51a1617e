pub mod lightfield;
