//! Literal records the snippets query.
//!
//! Every fixture function builds a fresh collection, so snippets never share
//! state.

use querysheet_query::{Discriminant, Fields, Number, Value, Variant};
use serde::Serialize;

/// Anything with a display name, used to project query results.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub const NAME: &'static str = "name";
    pub const AGE: &'static str = "age";

    pub fn new(name: &str, age: u32) -> Self {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub name: String,
    pub salary: u32,
}

impl Employee {
    pub const NAME: &'static str = "name";
    pub const SALARY: &'static str = "salary";

    pub fn new(name: &str, salary: u32) -> Self {
        Employee {
            name: name.to_string(),
            salary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub const NAME: &'static str = "name";
    pub const PRICE: &'static str = "price";

    pub fn new(name: &str, price: f64) -> Self {
        Product {
            name: name.to_string(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dog {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cat {
    pub name: String,
    pub lives: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bird {
    pub name: String,
    pub color: String,
}

/// Closed creature hierarchy; each kind carries its own extra attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Creature {
    Dog(Dog),
    Cat(Cat),
    Bird(Bird),
}

impl Creature {
    pub const NAME: &'static str = "name";
    pub const KIND: &'static str = "kind";

    pub const DOG: u32 = 0;
    pub const CAT: u32 = 1;
    pub const BIRD: u32 = 2;

    pub fn dog(name: &str, age: u32) -> Self {
        Creature::Dog(Dog {
            name: name.to_string(),
            age,
        })
    }

    pub fn cat(name: &str, lives: u32) -> Self {
        Creature::Cat(Cat {
            name: name.to_string(),
            lives,
        })
    }

    pub fn bird(name: &str, color: &str) -> Self {
        Creature::Bird(Bird {
            name: name.to_string(),
            color: color.to_string(),
        })
    }
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Employee {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Dog {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Creature {
    fn name(&self) -> &str {
        match self {
            Creature::Dog(d) => &d.name,
            Creature::Cat(c) => &c.name,
            Creature::Bird(b) => &b.name,
        }
    }
}

impl Fields for Person {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Person::NAME => Value::String(&self.name),
            Person::AGE => Value::Number(Number::from(self.age)),
            _ => Value::None,
        }
    }
}

impl Fields for Employee {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Employee::NAME => Value::String(&self.name),
            Employee::SALARY => Value::Number(Number::from(self.salary)),
            _ => Value::None,
        }
    }
}

impl Fields for Product {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Product::NAME => Value::String(&self.name),
            Product::PRICE => Value::Number(Number::F64(self.price)),
            _ => Value::None,
        }
    }
}

impl Discriminant for Creature {
    fn discriminant(&self) -> u32 {
        match self {
            Creature::Dog(_) => Creature::DOG,
            Creature::Cat(_) => Creature::CAT,
            Creature::Bird(_) => Creature::BIRD,
        }
    }
}

impl Fields for Creature {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Creature::NAME => Value::String(Named::name(self)),
            Creature::KIND => self.value(),
            _ => Value::None,
        }
    }
}

impl Variant<Dog> for Creature {
    fn variant(&self) -> Option<&Dog> {
        match self {
            Creature::Dog(dog) => Some(dog),
            _ => None,
        }
    }
}

impl Variant<Cat> for Creature {
    fn variant(&self) -> Option<&Cat> {
        match self {
            Creature::Cat(cat) => Some(cat),
            _ => None,
        }
    }
}

impl Variant<Bird> for Creature {
    fn variant(&self) -> Option<&Bird> {
        match self {
            Creature::Bird(bird) => Some(bird),
            _ => None,
        }
    }
}

pub fn numbers() -> Vec<i32> {
    vec![1, 2, 3, 4, 5]
}

pub fn names() -> Vec<String> {
    ["Alice", "Bob", "Charlie"].map(String::from).to_vec()
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Alice", 25),
        Person::new("Bob", 30),
        Person::new("Charlie", 20),
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new("Alice", 50000),
        Employee::new("Bob", 60000),
        Employee::new("Charlie", 55000),
        Employee::new("Diana", 60000),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new("Laptop", 1200.0),
        Product::new("Mouse", 25.5),
        Product::new("Keyboard", 75.0),
        Product::new("Monitor", 199.5),
    ]
}

pub fn creatures() -> Vec<Creature> {
    vec![
        Creature::dog("Rex", 5),
        Creature::cat("Whiskers", 9),
        Creature::bird("Tweety", "Yellow"),
        Creature::dog("Buddy", 3),
    ]
}
