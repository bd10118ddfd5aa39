// src/scalar/debug.rs
use crate::scalar::Scalar;
use std::fmt;

// Manual implementation: a derived scalar's inputs are summarised by id so that
// printing a deep graph does not recurse through it.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.data.history {
            None => "constant".to_string(),
            Some(h) => match h.function_name() {
                None => "leaf".to_string(),
                Some(name) => format!(
                    "{}({:?})",
                    name,
                    h.inputs.iter().map(|i| i.data.id).collect::<Vec<_>>()
                ),
            },
        };
        let derivative = match self.data.derivative.read() {
            Ok(guard) => format!("{:?}", *guard),
            Err(_) => "<poisoned>".to_string(),
        };
        match &self.data.name {
            Some(name) => write!(
                f,
                "Scalar(id={}, name={:?}, value={}, kind={}, derivative={})",
                self.data.id, name, self.data.value, kind, derivative
            ),
            None => write!(
                f,
                "Scalar(id={}, value={}, kind={}, derivative={})",
                self.data.id, self.data.value, kind, derivative
            ),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.value)
    }
}
