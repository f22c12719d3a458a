//! Vector norms and the norm-selection stack.
//!
//! A [`Norm`] names one of the five supported vector norms. A
//! [`NormStack`] is an explicit, never-empty stack of norms whose top
//! element is the active norm; code that needs a specific norm for a
//! bracketed computation pushes it, runs, and pops. The stack is a plain
//! value — thread it through calls instead of relying on process state.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::traits::FloatScalar;

/// A vector norm.
///
/// Parsed from the identifiers `"euclidean"`, `"manhattan"`, `"p<k>"`
/// (for a finite numeric `k`), `"maximum"`, and `"minimum"`.
///
/// ```
/// use statrix::Norm;
///
/// let n: Norm = "p3".parse().unwrap();
/// assert_eq!(n, Norm::P(3.0));
/// assert!("pear".parse::<Norm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Norm {
    /// `sqrt(Σ xᵢ²)`.
    Euclidean,
    /// `Σ |xᵢ|`.
    Manhattan,
    /// `(Σ |xᵢ|^p)^(1/p)`.
    P(f64),
    /// `max |xᵢ|` (0 for the empty vector).
    Maximum,
    /// `min |xᵢ|` (0 for the empty vector).
    Minimum,
}

impl Norm {
    /// Evaluate the norm over a slice of elements.
    pub fn apply<T: FloatScalar>(self, xs: &[T]) -> T {
        match self {
            Norm::Euclidean => {
                let mut acc = T::zero();
                for &x in xs {
                    acc = acc + x * x;
                }
                acc.sqrt()
            }
            Norm::Manhattan => {
                let mut acc = T::zero();
                for &x in xs {
                    acc = acc + x.abs();
                }
                acc
            }
            Norm::P(p) => {
                let p = T::from_f64(p);
                let mut acc = T::zero();
                for &x in xs {
                    acc = acc + x.abs().powf(p);
                }
                acc.powf(T::one() / p)
            }
            Norm::Maximum => {
                let mut acc = T::zero();
                for &x in xs {
                    if x.abs() > acc {
                        acc = x.abs();
                    }
                }
                acc
            }
            Norm::Minimum => match xs.first() {
                None => T::zero(),
                Some(&x0) => {
                    let mut acc = x0.abs();
                    for &x in &xs[1..] {
                        if x.abs() < acc {
                            acc = x.abs();
                        }
                    }
                    acc
                }
            },
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Norm::Euclidean => write!(f, "euclidean"),
            Norm::Manhattan => write!(f, "manhattan"),
            Norm::P(p) => write!(f, "p{}", p),
            Norm::Maximum => write!(f, "maximum"),
            Norm::Minimum => write!(f, "minimum"),
        }
    }
}

impl FromStr for Norm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "euclidean" => Ok(Norm::Euclidean),
            "manhattan" => Ok(Norm::Manhattan),
            "maximum" => Ok(Norm::Maximum),
            "minimum" => Ok(Norm::Minimum),
            _ => {
                if let Some(num) = s.strip_prefix('p') {
                    match num.parse::<f64>() {
                        Ok(p) if p.is_finite() => Ok(Norm::P(p)),
                        _ => Err(Error::InvalidNorm(s.to_owned())),
                    }
                } else {
                    Err(Error::InvalidNorm(s.to_owned()))
                }
            }
        }
    }
}

/// A never-empty stack of norms selecting the active one.
///
/// The bottom element is pinned to [`Norm::Euclidean`] for the lifetime
/// of the stack: popping at depth 1 is a no-op. Wrap any computation that
/// requires a specific norm in a strict push/pop bracket.
///
/// ```
/// use statrix::{Norm, NormStack};
///
/// let mut stack = NormStack::new();
/// stack.push(Norm::Manhattan);
/// stack.push(Norm::P(3.0));
/// stack.pop();
/// assert_eq!(stack.active(), Norm::Manhattan);
/// stack.pop();
/// stack.pop(); // bottom element never pops
/// assert_eq!(stack.active(), Norm::Euclidean);
/// ```
#[derive(Debug, Clone)]
pub struct NormStack {
    stack: Vec<Norm>,
}

impl Default for NormStack {
    fn default() -> Self {
        Self {
            stack: vec![Norm::Euclidean],
        }
    }
}

impl NormStack {
    /// A depth-1 stack with the Euclidean norm active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active norm (top of the stack).
    #[inline]
    pub fn active(&self) -> Norm {
        *self.stack.last().unwrap_or(&Norm::Euclidean)
    }

    /// Current stack depth (at least 1).
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a norm, making it active.
    pub fn push(&mut self, norm: Norm) {
        self.stack.push(norm);
    }

    /// Parse and push a norm identifier.
    ///
    /// Unrecognized identifiers leave the stack unchanged and report
    /// [`Error::InvalidNorm`].
    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        let norm = s.parse()?;
        self.push(norm);
        Ok(())
    }

    /// Pop the active norm. A no-op at depth 1.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}
