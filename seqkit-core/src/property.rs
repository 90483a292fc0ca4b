//! Reactive properties
//!
//! A property looks like a value but routes every read through a getter and
//! every write through a setter. Operators on a property read the current
//! value, apply the operator to it and, for compound assignment, hand the
//! result to the setter.
//!
//! Properties are single-threaded: shared state lives in `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut, Neg, Not};
use std::rc::Rc;

/// A value computed on every read.
pub struct ReadOnly<T> {
    getter: Box<dyn Fn() -> T>,
}

impl<T> ReadOnly<T> {
    /// Create a property whose reads call `getter`
    pub fn new<G>(getter: G) -> Self
    where
        G: Fn() -> T + 'static,
    {
        Self {
            getter: Box::new(getter),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        (self.getter)()
    }
}

/// A value read through a getter and written through a setter.
pub struct Property<T> {
    read: ReadOnly<T>,
    setter: Box<dyn Fn(T)>,
}

impl<T> Property<T> {
    /// Create a property from a getter and a setter
    pub fn new<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn() -> T + 'static,
        S: Fn(T) + 'static,
    {
        Self {
            read: ReadOnly::new(getter),
            setter: Box::new(setter),
        }
    }

    /// Pass `value` to the setter
    pub fn set(&self, value: T) {
        (self.setter)(value)
    }

    /// Read, transform with `f`, write back
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        self.set(f(self.get()))
    }
}

impl<T: Clone + 'static> Property<T> {
    /// A property that reads and writes a shared cell
    pub fn proxy(cell: Rc<RefCell<T>>) -> Self {
        let source = Rc::clone(&cell);
        Self::new(
            move || source.borrow().clone(),
            move |value| *cell.borrow_mut() = value,
        )
    }
}

impl<T> Deref for Property<T> {
    type Target = ReadOnly<T>;

    fn deref(&self) -> &ReadOnly<T> {
        &self.read
    }
}

/// A property over its own value that notifies an observer on every write.
///
/// The observer runs even if the written value equals the old one.
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    property: Property<T>,
}

impl<T: Clone + 'static> Observable<T> {
    /// Create with an initial value
    pub fn new<O>(value: T, observer: O) -> Self
    where
        O: Fn(&T) + 'static,
    {
        let value = Rc::new(RefCell::new(value));
        let read = Rc::clone(&value);
        let write = Rc::clone(&value);
        let property = Property::new(
            move || read.borrow().clone(),
            move |next: T| {
                *write.borrow_mut() = next;
                let current = write.borrow();
                observer(&current);
            },
        );
        Self { value, property }
    }

    /// Create with `T::default()` as the initial value
    pub fn with_observer<O>(observer: O) -> Self
    where
        T: Default,
        O: Fn(&T) + 'static,
    {
        Self::new(T::default(), observer)
    }

    /// Shared storage behind the property
    pub fn cell(&self) -> Rc<RefCell<T>> {
        Rc::clone(&self.value)
    }
}

impl<T> Deref for Observable<T> {
    type Target = Property<T>;

    fn deref(&self) -> &Property<T> {
        &self.property
    }
}

impl<T> DerefMut for Observable<T> {
    fn deref_mut(&mut self) -> &mut Property<T> {
        &mut self.property
    }
}

macro_rules! impl_binary_ops {
    ($ty:ident: $($trait:ident::$method:ident),*) => {
        $(
            impl<T, R> std::ops::$trait<R> for &$ty<T>
            where
                T: std::ops::$trait<R>,
            {
                type Output = T::Output;

                fn $method(self, rhs: R) -> T::Output {
                    std::ops::$trait::$method(self.get(), rhs)
                }
            }
        )*
    };
}

macro_rules! impl_assign_ops {
    ($($trait:ident::$method:ident => $op:ident::$op_method:ident),*) => {
        $(
            impl<T, R> std::ops::$trait<R> for Property<T>
            where
                T: std::ops::$op<R, Output = T>,
            {
                fn $method(&mut self, rhs: R) {
                    self.set(std::ops::$op::$op_method(self.get(), rhs));
                }
            }
        )*
    };
}

macro_rules! impl_property_common {
    ($($ty:ident),*) => {
        $(
            impl_binary_ops!($ty:
                Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem,
                BitXor::bitxor, BitAnd::bitand, BitOr::bitor, Shl::shl, Shr::shr
            );

            impl<T: Neg> Neg for &$ty<T> {
                type Output = T::Output;

                fn neg(self) -> T::Output {
                    -self.get()
                }
            }

            impl<T: Not> Not for &$ty<T> {
                type Output = T::Output;

                fn not(self) -> T::Output {
                    !self.get()
                }
            }

            impl<T: PartialEq> PartialEq<T> for $ty<T> {
                fn eq(&self, other: &T) -> bool {
                    self.get() == *other
                }
            }

            impl<T: PartialOrd> PartialOrd<T> for $ty<T> {
                fn partial_cmp(&self, other: &T) -> Option<Ordering> {
                    self.get().partial_cmp(other)
                }
            }

            impl<T: fmt::Debug> fmt::Debug for $ty<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($ty)).field(&self.get()).finish()
                }
            }

            impl<T: fmt::Display> fmt::Display for $ty<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.get(), f)
                }
            }
        )*
    };
}

impl_property_common!(ReadOnly, Property);

impl_assign_ops!(
    AddAssign::add_assign => Add::add,
    SubAssign::sub_assign => Sub::sub,
    MulAssign::mul_assign => Mul::mul,
    DivAssign::div_assign => Div::div,
    RemAssign::rem_assign => Rem::rem,
    BitXorAssign::bitxor_assign => BitXor::bitxor,
    BitAndAssign::bitand_assign => BitAnd::bitand,
    BitOrAssign::bitor_assign => BitOr::bitor,
    ShlAssign::shl_assign => Shl::shl,
    ShrAssign::shr_assign => Shr::shr
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_readonly_calls_getter_each_read() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let answer = ReadOnly::new(move || {
            counter.set(counter.get() + 1);
            21
        });

        assert_eq!(&answer * 2, 42);
        assert_eq!(&answer + 1, 22);
        assert!(answer == 21);
        assert!(answer < 30);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_readonly_operators() {
        let seven = ReadOnly::new(|| 7i32);
        assert_eq!(&seven - 2, 5);
        assert_eq!(&seven / 2, 3);
        assert_eq!(&seven % 4, 3);
        assert_eq!(&seven ^ 1, 6);
        assert_eq!(&seven & 3, 3);
        assert_eq!(&seven | 8, 15);
        assert_eq!(&seven << 1u32, 14);
        assert_eq!(&seven >> 1u32, 3);
        assert_eq!(-&seven, -7);
        assert_eq!(!&ReadOnly::new(|| false), true);
        assert_eq!(seven.to_string(), "7");
    }

    #[test]
    fn test_property_routes_writes_through_setter() {
        let store = Rc::new(Cell::new(10));
        let (read, write) = (Rc::clone(&store), Rc::clone(&store));
        // The setter clamps, so the stored value is whatever it decides.
        let mut level = Property::new(move || read.get(), move |v: i32| write.set(v.min(100)));

        level += 5;
        assert_eq!(store.get(), 15);
        level *= 10;
        assert_eq!(store.get(), 100);
        level -= 1;
        level <<= 1;
        assert_eq!(level.get(), 100);
        level.set(3);
        level.update(|v| v * v);
        assert!(level == 9);
    }

    #[test]
    fn test_proxy() {
        let cell = Rc::new(RefCell::new(String::from("a")));
        let mut text = Property::proxy(Rc::clone(&cell));
        text += "b";
        assert_eq!(*cell.borrow(), "ab");
        cell.borrow_mut().push('c');
        assert_eq!(text.get(), "abc");
    }

    #[test]
    fn test_observable_notifies_on_every_write() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut value = Observable::new(1, move |v: &i32| sink.borrow_mut().push(*v));

        *value += 1;
        value.set(2);
        value.update(|v| v * 10);
        assert_eq!(value.get(), 20);
        assert_eq!(*seen.borrow(), vec![2, 2, 20]);
        assert_eq!(*value.cell().borrow(), 20);
    }

    #[test]
    fn test_observable_default() {
        let count = Rc::new(Cell::new(0));
        let observed = Rc::clone(&count);
        let value: Observable<u8> = Observable::with_observer(move |_| {
            observed.set(observed.get() + 1);
        });
        assert_eq!(value.get(), 0);
        value.set(0);
        assert_eq!(count.get(), 1);
    }
}
