#![forbid(unsafe_code)]

pub mod clock;
pub mod elapsed;
pub mod model;

pub mod ids {
    use std::fmt;
    use std::str::FromStr;

    macro_rules! row_id {
        ($(#[$meta:meta])* $name:ident) => {
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name(i64);

            impl $name {
                pub const fn new(value: i64) -> Self {
                    Self(value)
                }

                pub const fn get(self) -> i64 {
                    self.0
                }
            }

            impl From<i64> for $name {
                fn from(value: i64) -> Self {
                    Self(value)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = IdParseError;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(IdParseError::Empty);
                    }
                    value
                        .parse::<i64>()
                        .map(Self)
                        .map_err(|_| IdParseError::NotAnInteger)
                }
            }
        };
    }

    row_id!(
        /// Primary key of a row in `spaces`.
        SpaceId
    );
    row_id!(
        /// Primary key of a row in `folders`.
        FolderId
    );
    row_id!(
        /// Primary key of a row in `lists`.
        ListId
    );
    row_id!(
        /// Primary key of a row in `tasks`.
        TaskId
    );

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum IdParseError {
        Empty,
        NotAnInteger,
    }

    impl fmt::Display for IdParseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Empty => write!(f, "id is empty"),
                Self::NotAnInteger => write!(f, "id is not an integer"),
            }
        }
    }

    impl std::error::Error for IdParseError {}
}

pub mod names {
    use std::fmt;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum NameError {
        Blank,
    }

    impl fmt::Display for NameError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Blank => write!(f, "name must not be blank"),
            }
        }
    }

    impl std::error::Error for NameError {}

    /// Rejects names that are empty or whitespace-only.
    ///
    /// Accepted names are stored exactly as given; callers that want trimming
    /// trim before calling into the store.
    pub fn validate_name(value: &str) -> Result<(), NameError> {
        if value.trim().is_empty() {
            return Err(NameError::Blank);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
