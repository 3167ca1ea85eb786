/// Implements componentwise `+`, `-`, `*` between two values of a
/// three-component vector type, scalar `*` on both sides, negation, and the
/// matching compound assignment operators.
macro_rules! impl_componentwise_ops {
    (impl for $type:ident<$scalar:ty> { $($field:ident),+ }) => {
        impl_componentwise_ops! { @binop $type, Add, add, AddAssign, add_assign, +, $($field),+ }
        impl_componentwise_ops! { @binop $type, Sub, sub, SubAssign, sub_assign, -, $($field),+ }
        impl_componentwise_ops! { @binop $type, Mul, mul, MulAssign, mul_assign, *, $($field),+ }

        impl std::ops::Neg for $type {
            type Output = $type;

            fn neg(self) -> Self::Output {
                $type { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul<$scalar> for $type {
            type Output = $type;

            fn mul(self, rhs: $scalar) -> Self::Output {
                $type { $($field: self.$field * rhs),+ }
            }
        }
        impl std::ops::Mul<$type> for $scalar {
            type Output = $type;

            fn mul(self, rhs: $type) -> Self::Output {
                rhs * self
            }
        }
        impl std::ops::MulAssign<$scalar> for $type {
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }
    };

    (@binop $type:ident, $trait:ident, $func:ident, $assign_trait:ident, $assign_func:ident, $op:tt, $($field:ident),+) => {
        impl std::ops::$trait for $type {
            type Output = $type;

            fn $func(self, rhs: $type) -> Self::Output {
                $type { $($field: self.$field $op rhs.$field),+ }
            }
        }
        impl<'a> std::ops::$trait<&'a $type> for $type {
            type Output = $type;

            fn $func(self, rhs: &'a $type) -> Self::Output {
                std::ops::$trait::$func(self, *rhs)
            }
        }
        impl<'a> std::ops::$trait<$type> for &'a $type {
            type Output = $type;

            fn $func(self, rhs: $type) -> Self::Output {
                std::ops::$trait::$func(*self, rhs)
            }
        }
        impl std::ops::$assign_trait for $type {
            fn $assign_func(&mut self, rhs: $type) {
                *self = std::ops::$trait::$func(*self, rhs);
            }
        }
    };
}
