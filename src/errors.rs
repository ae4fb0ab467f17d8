// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at everything `error_chain!` creates.
#![allow(deprecated)]

use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
        Json(::serde_json::Error);
    }

    errors {
        // Rows, columns, canvas extent or wall thickness unusable for a maze.
        InvalidDimensions(reason: String) {
            description("invalid maze dimensions")
            display("invalid maze dimensions: {}", reason)
        }
    }
}

pub fn invalid_dimensions<T>(reason: String) -> Result<T> {
    Err(ErrorKind::InvalidDimensions(reason).into())
}
