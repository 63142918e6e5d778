pub mod numbers;

#[macro_export]
#[cfg(feature = "debug")]
macro_rules! debug_log {
    ($($args:tt)*) => {{
        println!("{}", format_args!($($args)*));
    }};
}

#[macro_export]
#[cfg(not(feature = "debug"))]
macro_rules! debug_log {
    ($($args:tt)*) => {{}};
}

#[macro_export]
macro_rules! define_error {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
        #[error("{reason}")]
        pub struct $name {
            pub reason: String,
        }

        impl $name {
            pub fn new(args: impl ::core::fmt::Display) -> Self {
                Self {
                    reason: args.to_string(),
                }
            }

            pub fn fmt(args: ::core::fmt::Arguments<'_>) -> Self {
                Self {
                    reason: args.to_string(),
                }
            }
        }
    };
}

define_error!(InvalidVarint);
#[macro_export]
macro_rules! varint_error {
    ($($arg:tt)*) => {
        $crate::utils::InvalidVarint::fmt(format_args!($($arg)*))
    };
}

impl From<std::io::Error> for InvalidVarint {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => {
                varint_error!("Stream ended before the varint terminated.")
            }
            _ => varint_error!("Stream error while reading varint: {}", err),
        }
    }
}

pub type Result<T> = core::result::Result<T, InvalidVarint>;

/// Whole-buffer bounds shared by both decoders.
pub(crate) fn check_bounds(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(varint_error!("Data buffer was empty."));
    }
    if data.len() > crate::LEB128_MAX_SIZE {
        return Err(varint_error!(
            "Data buffer was too large ({} bytes, max {}).",
            data.len(),
            crate::LEB128_MAX_SIZE
        ));
    }
    Ok(())
}
