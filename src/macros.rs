// src/macros.rs
//
// String shorthands used across the crate.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Glue `&str`-likes into one `String`: `join!(link_base, id)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut buf = ::std::string::String::from($first);
        $( buf.push_str($rest); )+
        buf
    }};
}

/// Owned copy of a `&[&str]` table, e.g. the card headers.
#[macro_export]
macro_rules! owned {
    ($table:expr) => {
        $table
            .iter()
            .map(|x| ::std::string::String::from(*x))
            .collect::<::std::vec::Vec<::std::string::String>>()
    };
}
