//! Fixed sets of domain constants.

mod example_status;

pub use example_status::ExampleStatus;
