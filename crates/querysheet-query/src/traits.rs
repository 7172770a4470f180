//! Record-facing traits.
//!
//! [`Fields`] lets a record take part in clause queries. [`Discriminant`]
//! turns a closed enum into the `u32` a [`Value::Enum`] carries, and
//! [`Variant`] plus [`of_type`] filter a tagged enum down to one payload type.

use crate::value::Value;

/// Named field access for the query engine.
///
/// ```
/// use querysheet_query::{Fields, Number, Query, Value};
///
/// struct Product {
///     name: String,
///     price: f64,
/// }
///
/// impl Fields for Product {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(&self.name),
///             "price" => Value::Number(Number::F64(self.price)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let products = vec![
///     Product { name: "Mouse".into(), price: 25.5 },
///     Product { name: "Laptop".into(), price: 1200.0 },
/// ];
/// let cheap = Query::new().and_lt("price", 100.0f64).build();
/// assert_eq!(cheap.count(&products, Product::accessor), 1);
/// ```
pub trait Fields {
    /// Value of the named field, or [`Value::None`] for unknown names.
    fn field(&self, name: &str) -> Value<'_>;

    /// Function-pointer form of [`field`](Fields::field) for query methods.
    fn accessor<'a>(item: &'a Self, name: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field(name)
    }
}

/// Stable discriminant of a closed enum.
///
/// Use explicit numbers rather than declaration order so clauses built
/// against them keep their meaning when variants are added.
pub trait Discriminant {
    fn discriminant(&self) -> u32;

    fn value(&self) -> Value<'static> {
        Value::Enum(self.discriminant())
    }
}

/// Access to one payload type of a tagged enum.
pub trait Variant<V> {
    fn variant(&self) -> Option<&V>;
}

/// Keeps the elements holding a `V` payload, in input order.
pub fn of_type<T, V>(items: &[T]) -> Vec<&V>
where
    T: Variant<V>,
{
    items.iter().filter_map(<T as Variant<V>>::variant).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug, PartialEq)]
    struct Square(u32);

    #[derive(Debug, PartialEq)]
    struct Circle(u32);

    enum Shape {
        Square(Square),
        Circle(Circle),
    }

    impl Discriminant for Shape {
        fn discriminant(&self) -> u32 {
            match self {
                Shape::Square(_) => 0,
                Shape::Circle(_) => 1,
            }
        }
    }

    impl Variant<Square> for Shape {
        fn variant(&self) -> Option<&Square> {
            match self {
                Shape::Square(s) => Some(s),
                _ => None,
            }
        }
    }

    impl Variant<Circle> for Shape {
        fn variant(&self) -> Option<&Circle> {
            match self {
                Shape::Circle(c) => Some(c),
                _ => None,
            }
        }
    }

    impl Fields for Shape {
        fn field(&self, name: &str) -> Value<'_> {
            match (name, self) {
                ("kind", shape) => shape.value(),
                ("side", Shape::Square(s)) => Value::Number(Number::from(s.0)),
                ("radius", Shape::Circle(c)) => Value::Number(Number::from(c.0)),
                _ => Value::None,
            }
        }
    }

    fn shapes() -> Vec<Shape> {
        vec![
            Shape::Square(Square(2)),
            Shape::Circle(Circle(1)),
            Shape::Square(Square(5)),
        ]
    }

    #[test]
    fn of_type_picks_one_payload() {
        let shapes = shapes();
        let squares: Vec<&Square> = of_type(&shapes);
        assert_eq!(squares, [&Square(2), &Square(5)]);
        let circles: Vec<&Circle> = of_type(&shapes);
        assert_eq!(circles, [&Circle(1)]);
    }

    #[test]
    fn fields_and_discriminants() {
        let shapes = shapes();
        assert_eq!(shapes[1].field("kind"), Value::Enum(1));
        assert_eq!(shapes[0].field("side"), Value::Number(Number::U64(2)));
        assert_eq!(shapes[0].field("radius"), Value::None);
        assert_eq!(Shape::accessor(&shapes[2], "side"), Value::Number(Number::U64(5)));
    }
}
