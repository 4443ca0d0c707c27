/// Helper macro that implements [`Display`](std::fmt::Display) for an enum.
///
/// The enum is serialized to its [`serde`] string form, so the displayed value
/// always matches the wire encoding.
#[macro_export]
macro_rules! enum_display_serde {
    ($name:ident) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let serde_json::Value::String(s) = serde_json::to_value(self).unwrap() else {
                    panic!("enum must serialize to a string");
                };
                write!(f, "{s}")
            }
        }
    };
}
