//! macros used by tinge

/// helper macro for generating validators
#[macro_export]
macro_rules! validator {
    ($struct_name:ty, $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? ) => {
        impl Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// helper macro for nested validation
#[macro_export]
macro_rules! validator_nested {
    ($struct_name:ty,
        fields: { $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? }
        nested: { $( $nested:ident );* $(;)? }
    ) => {
        impl Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                $(
                    if let Some(ref nested) = self.$nested {
                        if let Err(nested_errors) = nested.validate() {
                            for err in nested_errors {
                                errors.push(format!("{}.{}", stringify!($nested), err));
                            }
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// get the current value of a given setting
#[macro_export]
macro_rules! getopt {
    () => {
        $crate::config::instance::config()
    };

    ($field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$field.clone(),
            $crate::config::options::Tinge::default()
                .$field
                .expect(concat!("Default value missing for: ", stringify!($field))),
        )
    }};

    ($lvl1:ident . $field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$lvl1.as_ref().and_then(|sub| sub.$field.clone()),
            $crate::config::options::Tinge::default()
                .$lvl1
                .and_then(|sub| sub.$field)
                .expect(concat!(
                    "Default value missing for: ",
                    stringify!($lvl1),
                    ".",
                    stringify!($field)
                )),
        )
    }};

    (raw $field:ident) => {{
        $crate::config::instance::config()
            .ok()
            .and_then(|c| c.$field.clone())
    }};

    (raw $lvl1:ident . $field:ident) => {{
        $crate::config::instance::config()
            .ok()
            .and_then(|c| c.$lvl1.as_ref().and_then(|sub| sub.$field.clone()))
    }};
}
