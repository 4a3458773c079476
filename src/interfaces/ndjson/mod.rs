pub mod invocation_reader;
pub mod response_writer;

pub use invocation_reader::{Invocation, InvocationReader};
pub use response_writer::ResponseWriter;
