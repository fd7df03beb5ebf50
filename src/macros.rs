/// Builds a [`Dom`](crate::Dom) tree with XML-like nesting.
///
/// - `dom!(name)` is an element with no value
/// - `dom!(name: "text")` is a leaf with a value
/// - `dom!(name { ... })` is an element whose children are listed in the
///   braces, separated by commas, in any of the three forms
///
/// # Examples
///
/// ```rust
/// use pom_reader::dom;
///
/// let goals = dom!(goals {
///     goal: "compile",
///     goal: "test-compile",
/// });
/// assert_eq!(goals.children_named("goal").count(), 2);
///
/// let nested = dom!(configuration {
///     archive {
///         manifest { addClasspath: "true" },
///     },
///     skip,
/// });
/// assert_eq!(nested.child("skip").and_then(|n| n.value()), None);
/// ```
#[macro_export]
macro_rules! dom {
    ($name:ident) => {
        $crate::Dom::new(stringify!($name))
    };

    ($name:ident : $value:expr) => {
        $crate::Dom::new(stringify!($name)).with_value($value)
    };

    ($name:ident { $($body:tt)* }) => {{
        #[allow(unused_mut)]
        let mut node = $crate::Dom::new(stringify!($name));
        $crate::__dom_children!(node; $($body)*);
        node
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dom_children {
    ($node:ident;) => {};

    ($node:ident; $name:ident : $value:expr , $($rest:tt)*) => {
        $node = $node.with_child($crate::dom!($name: $value));
        $crate::__dom_children!($node; $($rest)*);
    };
    ($node:ident; $name:ident : $value:expr) => {
        $node = $node.with_child($crate::dom!($name: $value));
    };

    ($node:ident; $name:ident { $($inner:tt)* } , $($rest:tt)*) => {
        $node = $node.with_child($crate::dom!($name { $($inner)* }));
        $crate::__dom_children!($node; $($rest)*);
    };
    ($node:ident; $name:ident { $($inner:tt)* }) => {
        $node = $node.with_child($crate::dom!($name { $($inner)* }));
    };

    ($node:ident; $name:ident , $($rest:tt)*) => {
        $node = $node.with_child($crate::dom!($name));
        $crate::__dom_children!($node; $($rest)*);
    };
    ($node:ident; $name:ident) => {
        $node = $node.with_child($crate::dom!($name));
    };
}

#[cfg(test)]
mod tests {
    use crate::Dom;

    #[test]
    fn test_dom_macro_leaves() {
        assert_eq!(dom!(skip), Dom::new("skip"));
        assert_eq!(dom!(skip: "true"), Dom::new("skip").with_value("true"));
    }

    #[test]
    fn test_dom_macro_empty_block() {
        assert_eq!(dom!(configuration {}), Dom::new("configuration"));
    }

    #[test]
    fn test_dom_macro_nesting() {
        let node = dom!(configuration {
            source: "17",
            archive { index: "true" },
            skip
        });

        let expected = Dom::new("configuration")
            .with_child(Dom::new("source").with_value("17"))
            .with_child(Dom::new("archive").with_child(Dom::new("index").with_value("true")))
            .with_child(Dom::new("skip"));
        assert_eq!(node, expected);
    }
}
