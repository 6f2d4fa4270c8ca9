//! Class descriptors: the constructor signatures a class offers.

use std::fmt;

use crate::arguments::ArgumentList;
use crate::error::{format_signature, ConfigParserError, Result};
use crate::types::TypeTag;
use crate::writable::Writable;

/// Outcome of running a constructor body.
///
/// The error string becomes the reason of an `Instantiation` error.
pub type ConstructorResult = std::result::Result<Box<dyn Writable>, String>;

/// Constructor body. It receives arguments whose types already match the
/// constructor's signature.
pub type ConstructorFn = dyn Fn(&ArgumentList) -> ConstructorResult + Send + Sync;

/// Box a writable as a successful constructor result.
pub fn boxed<W: Writable + 'static>(object: W) -> ConstructorResult {
    Ok(Box::new(object))
}

/// Message for an argument a constructor body expected but did not get.
#[must_use]
pub fn missing_argument(index: usize, expected: TypeTag) -> String {
    format!("argument {index} is not a {expected}")
}

/// Visibility of a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

/// A single constructor of a class.
pub struct Constructor {
    signature: Vec<TypeTag>,
    access: Access,
    body: Box<ConstructorFn>,
}

impl Constructor {
    /// Ordered parameter types.
    #[must_use]
    pub fn signature(&self) -> &[TypeTag] {
        &self.signature
    }

    #[must_use]
    pub fn access(&self) -> Access {
        self.access
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &format_signature(&self.signature))
            .field("access", &self.access)
            .finish()
    }
}

/// A class that may appear in an `<object class="...">` element.
///
/// Classes declare their constructors up front; lookup is an exact match
/// on the ordered parameter types.
#[derive(Debug)]
pub struct ClassDescriptor {
    name: String,
    is_abstract: bool,
    constructors: Vec<Constructor>,
}

impl ClassDescriptor {
    /// Describe a concrete class with no constructors yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            constructors: Vec::new(),
        }
    }

    /// Describe an abstract class. Constructors can still be declared and
    /// resolved, but instantiating fails.
    #[must_use]
    pub fn abstract_class(name: impl Into<String>) -> Self {
        Self {
            is_abstract: true,
            ..Self::new(name)
        }
    }

    /// Declare a public constructor.
    #[must_use]
    pub fn constructor<F>(self, signature: &[TypeTag], body: F) -> Self
    where
        F: Fn(&ArgumentList) -> ConstructorResult + Send + Sync + 'static,
    {
        self.with_constructor(signature, Access::Public, body)
    }

    /// Declare a non-public constructor.
    #[must_use]
    pub fn private_constructor<F>(self, signature: &[TypeTag], body: F) -> Self
    where
        F: Fn(&ArgumentList) -> ConstructorResult + Send + Sync + 'static,
    {
        self.with_constructor(signature, Access::Private, body)
    }

    /// Declare a constructor. A second declaration of the same signature
    /// replaces the first.
    #[must_use]
    pub fn with_constructor<F>(mut self, signature: &[TypeTag], access: Access, body: F) -> Self
    where
        F: Fn(&ArgumentList) -> ConstructorResult + Send + Sync + 'static,
    {
        self.constructors.retain(|c| c.signature != signature);
        self.constructors.push(Constructor {
            signature: signature.to_vec(),
            access,
            body: Box::new(body),
        });
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Declared constructors, in declaration order.
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Find the constructor whose parameter types equal `types`, in order.
    #[must_use]
    pub fn find_constructor(&self, types: &[TypeTag]) -> Option<&Constructor> {
        self.constructors.iter().find(|c| c.signature == types)
    }

    /// Instantiate the class with the constructor matching `args`' types.
    ///
    /// # Errors
    /// * `ConstructorResolution` if no constructor has exactly these types
    /// * `Access` if the matching constructor is not public
    /// * `Instantiation` if the class is abstract or the constructor body fails
    pub fn instantiate(&self, args: &ArgumentList) -> Result<Box<dyn Writable>> {
        let types = args.types();
        let constructor = self.find_constructor(&types).ok_or_else(|| {
            ConfigParserError::ConstructorResolution {
                class_name: self.name.clone(),
                types: types.clone(),
            }
        })?;

        if constructor.access != Access::Public {
            return Err(ConfigParserError::Access {
                class_name: self.name.clone(),
                types,
            });
        }

        if self.is_abstract {
            return Err(ConfigParserError::Instantiation {
                class_name: self.name.clone(),
                reason: "class is abstract".to_string(),
            });
        }

        (constructor.body)(args).map_err(|reason| ConfigParserError::Instantiation {
            class_name: self.name.clone(),
            reason,
        })
    }
}
