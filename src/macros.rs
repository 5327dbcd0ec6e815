// src/macros.rs

/// `s!()` → empty String, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate `&str`-likes into a new String: `join!("lot-", &id)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Count with a naive English plural: `plural!(1, "result")` → "1 result",
/// `plural!(3, "row")` → "3 rows".
#[macro_export]
macro_rules! plural {
    ($n:expr, $noun:expr) => {{
        let n: usize = $n;
        format!("{} {}{}", n, $noun, if n == 1 { "" } else { "s" })
    }};
}
