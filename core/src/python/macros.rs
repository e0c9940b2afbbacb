//! Macros for reducing PyO3 boilerplate in enum wrappers

/// Implements common From traits for PyO3 wrapper types
macro_rules! impl_py_from {
    ($py_type:ty, $inner_type:ty) => {
        impl From<$inner_type> for $py_type {
            fn from(inner: $inner_type) -> Self {
                Self { inner }
            }
        }

        impl From<$py_type> for $inner_type {
            fn from(py: $py_type) -> Self {
                py.inner
            }
        }
    };
}

/// Declares a PyO3 wrapper class for a fieldless enum with `simple_name()`
///
/// Each listed variant becomes a class attribute.
macro_rules! py_enum_wrapper {
    ($py_type:ident, $inner_type:ident, $name:tt, [$($attr:ident => $variant:ident),+ $(,)?]) => {
        #[pyclass(name = $name, module = "pathreport")]
        #[derive(Clone, Debug)]
        pub struct $py_type {
            pub(crate) inner: $inner_type,
        }

        #[pymethods]
        impl $py_type {
            $(
                #[classattr]
                const $attr: Self = Self {
                    inner: $inner_type::$variant,
                };
            )+

            pub fn simple_name(&self) -> &'static str {
                self.inner.simple_name()
            }

            #[getter]
            fn value(&self) -> &'static str {
                self.inner.simple_name()
            }

            fn __str__(&self) -> String {
                self.inner.simple_name().to_string()
            }

            fn __repr__(&self) -> String {
                format!("{}.{:?}", $name, self.inner)
            }

            fn __eq__(&self, other: &$py_type) -> bool {
                self.inner == other.inner
            }

            fn __hash__(&self) -> u64 {
                let mut hasher = std::collections::hash_map::DefaultHasher::new();
                std::hash::Hash::hash(&self.inner, &mut hasher);
                std::hash::Hasher::finish(&hasher)
            }
        }

        impl_py_from!($py_type, $inner_type);
    };
}

pub(crate) use impl_py_from;
pub(crate) use py_enum_wrapper;
