use std::convert::From;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::result;

use minijinja::{Error as MiniJinjaError, ErrorKind as MiniJinjaErrorKind};
use serde_norway::Error as YamlError;

/// A specialized type for `jsrender` operations.
pub type Result<T> = result::Result<T, Error>;

/// The error type for `jsrender` executions.
pub struct Error {
    repr: Repr,
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.repr, f)
    }
}

enum Repr {
    Simple(ErrorKind),
    Custom(Box<Custom>),
}

#[derive(Debug)]
struct Custom {
    kind: ErrorKind,
    error: Box<dyn StdError + Send + Sync>,
}

/// A list specifying general categories of `jsrender` error.
///
/// This list is intended to grow over time and it is not recommended to
/// exhaustively match against it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A template file was not found in the base directory.
    TemplateNotFound,
    /// Template syntax is malformed or references an undefined variable.
    TemplateRenderError,
    /// I/O error propagation, often the output directory is missing.
    IOError,
    /// Data is invalid, often a build plan that fails to parse.
    InvalidData,
    /// Any `jsrender` error not part of this list.
    Other,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TemplateNotFound => "template not found",
            ErrorKind::TemplateRenderError => "template render error",
            ErrorKind::IOError => "I/O error",
            ErrorKind::InvalidData => "invalid data",
            ErrorKind::Other => "other error",
        }
    }
}

impl From<ErrorKind> for Error {
    /// Converts an [`ErrorKind`] into an [`Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsrender_core::error::{Error, ErrorKind};
    ///
    /// let error = Error::from(ErrorKind::TemplateNotFound);
    /// assert_eq!("template not found", format!("{}", error));
    /// ```
    #[inline]
    fn from(kind: ErrorKind) -> Error {
        Error {
            repr: Repr::Simple(kind),
        }
    }
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`] of kind `ErrorKind::IOError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsrender_core::error::{Error, ErrorKind};
    /// use std::io;
    ///
    /// let io_error = io::Error::new(io::ErrorKind::NotFound, "fail");
    /// let error = Error::from(io_error);
    /// assert_eq!(error.kind(), ErrorKind::IOError);
    /// assert_eq!("fail", format!("{}", error));
    /// ```
    #[inline]
    fn from(e: io::Error) -> Error {
        Error::new(ErrorKind::IOError, e)
    }
}

impl From<MiniJinjaError> for Error {
    /// Converts a minijinja error into an [`Error`].
    ///
    /// Missing templates map to `ErrorKind::TemplateNotFound`, everything else
    /// to `ErrorKind::TemplateRenderError`.
    #[inline]
    fn from(error: MiniJinjaError) -> Error {
        let kind = match error.kind() {
            MiniJinjaErrorKind::TemplateNotFound => ErrorKind::TemplateNotFound,
            _ => ErrorKind::TemplateRenderError,
        };
        Error::new(kind, error)
    }
}

impl From<YamlError> for Error {
    #[inline]
    fn from(error: YamlError) -> Error {
        Error::new(ErrorKind::InvalidData, error)
    }
}

impl Error {
    /// Creates a new `jsrender` error from a known kind of error as well as an
    /// arbitrary error payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsrender_core::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::TemplateRenderError, "unexpected end of input");
    /// assert_eq!(err.kind(), ErrorKind::TemplateRenderError);
    /// ```
    pub fn new<E>(kind: ErrorKind, error: E) -> Error
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::_new(kind, error.into())
    }

    fn _new(kind: ErrorKind, error: Box<dyn StdError + Send + Sync>) -> Error {
        Error {
            repr: Repr::Custom(Box::new(Custom { kind, error })),
        }
    }

    /// Returns the corresponding `ErrorKind` for this error.
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::Custom(ref c) => c.kind,
            Repr::Simple(kind) => kind,
        }
    }

    /// Returns a reference to the inner error wrapped by this error (if any).
    pub fn get_ref(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self.repr {
            Repr::Simple(..) => None,
            Repr::Custom(ref c) => Some(&*c.error),
        }
    }

    /// Consumes the `Error`, returning its inner error (if any).
    pub fn into_inner(self) -> Option<Box<dyn StdError + Send + Sync>> {
        match self.repr {
            Repr::Simple(..) => None,
            Repr::Custom(c) => Some(c.error),
        }
    }
}

impl fmt::Debug for Repr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Repr::Custom(ref c) => fmt::Debug::fmt(&c, fmt),
            Repr::Simple(kind) => fmt.debug_tuple("Kind").field(&kind).finish(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Custom(ref c) => c.error.fmt(fmt),
            Repr::Simple(kind) => write!(fmt, "{}", kind.as_str()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.repr {
            Repr::Simple(..) => None,
            Repr::Custom(ref c) => c.error.source(),
        }
    }
}
