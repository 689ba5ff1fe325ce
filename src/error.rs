use std::error;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    NonPositiveRadius(f64),
    NegativeFuzziness(f64),
    NonPositiveRefractiveIndex(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonPositiveRadius(radius) => {
                write!(f, "sphere radius must be positive, got {}", radius)
            }
            Error::NegativeFuzziness(fuzziness) => {
                write!(f, "fuzziness must not be negative, got {}", fuzziness)
            }
            Error::NonPositiveRefractiveIndex(ior) => {
                write!(f, "refractive index must be positive, got {}", ior)
            }
        }
    }
}

impl error::Error for Error {}
