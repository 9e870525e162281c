mod error;
mod interpreter;
mod natural;
mod value;

pub use error::EvalError;
pub use interpreter::Interpreter;
pub use natural::Natural;
pub use value::{Bindings, Value};
