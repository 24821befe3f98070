/// Build a `Vec<Vec<_>>` from array literals, e.g. `vec2d![[0, 1], [1, 2]]`.
#[macro_export]
macro_rules! vec2d {
    [] => {
        Vec::<Vec<_>>::new()
    };
    [$($element:expr),+ $(,)?] => {
        {
            let mut v = Vec::new();
            $(v.push($element.to_vec());)*
            v
        }
    };
}

/// Build an edge/pair list `Vec<(usize, usize)>` from `[a, b]` literals.
#[macro_export]
macro_rules! pairs {
    [$([$a:expr, $b:expr]),* $(,)?] => {
        vec![$(($a as usize, $b as usize)),*]
    };
}

/// `file:line` of the call site, for log messages.
#[macro_export]
macro_rules! f_loc {
    () => {
        concat!(file!(), ":", line!())
    };
}
