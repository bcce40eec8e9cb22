// Entity Models
//
// Storage-facing records. Identity is assigned by the repository on first save
// and never changes afterwards.

pub mod employee;

pub use employee::Employee;
