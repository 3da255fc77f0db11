use crate::Value;

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A type that can index into a [`Value`].
///
/// `usize` selects a list element by position; `str` and `String` select a
/// compound entry by name. Indexing into a value of any other kind returns
/// `None`, as does an absent position or name.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'a>(&self, value: &'a Value) -> Option<&'a Value>;

    #[doc(hidden)]
    fn index_into_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut Value>;
}

impl Index for usize {
    #[inline]
    fn index_into<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match value {
            Value::List(list) => list.get(*self),
            _ => None,
        }
    }

    #[inline]
    fn index_into_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut Value> {
        match value {
            Value::List(list) => list.get_mut(*self),
            _ => None,
        }
    }
}

impl Index for str {
    #[inline]
    fn index_into<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match value {
            Value::Compound(compound) => compound.get(self),
            _ => None,
        }
    }

    #[inline]
    fn index_into_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut Value> {
        match value {
            Value::Compound(compound) => compound.get_mut(self),
            _ => None,
        }
    }
}

impl Index for String {
    #[inline]
    fn index_into<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.as_str().index_into(value)
    }

    #[inline]
    fn index_into_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn index_into<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        (**self).index_into(value)
    }

    #[inline]
    fn index_into_mut<'a>(&self, value: &'a mut Value) -> Option<&'a mut Value> {
        (**self).index_into_mut(value)
    }
}
