use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
use tie::bindings::Bindings;
use tie::prelude::*;
use tie::tuple::Tuple;
use tie::ElementOf;

#[derive(Debug, Clone, PartialEq, TupleLike)]
struct Reading {
    sensor: &'static str,
    celsius: f32,
    sequence: u32,
}

#[derive(Debug, Clone, PartialEq, TupleLike)]
struct Pair<A, B>(A, B);

#[derive(TupleLike)]
struct Marker;

#[derive(TupleLike)]
struct Borrowed<'a, T: ?Sized>
where
    T: AsRef<str>,
{
    label: &'a T,
}

assert_impl_all!(Reading: TupleLike);
assert_impl_all!(Pair<u8, String>: TupleLike);
assert_type_eq_all!(<Reading as TupleLike>::Elements, (&'static str, (f32, (u32, ()))));
assert_type_eq_all!(ElementOf<Pair<u8, String>, 1>, String);
assert_type_eq_all!(<Marker as TupleLike>::Elements, ());
assert_type_eq_all!(ElementOf<Borrowed<'static, String>, 0>, &'static String);

type Vars = <(&'static mut String, &'static mut f64, &'static mut u64) as Tuple>::AsList;
assert_impl_all!(Vars: Bindings<<Reading as TupleLike>::Elements>);
assert_not_impl_any!(Vars: Bindings<<Pair<String, f64> as TupleLike>::Elements>);

#[test]
fn fields_in_declaration_order() {
    assert_eq!(Reading::LEN, 3);
    assert_eq!(Pair::<(), ()>::LEN, 2);
    assert_eq!(Marker::LEN, 0);

    let mut sensor = String::new();
    let mut celsius = 0.0f64;
    let mut sequence = 0u64;
    let reading = Reading {
        sensor: "attic",
        celsius: 21.5,
        sequence: 9,
    };
    let _ = tie!(sensor, celsius, sequence).set(reading);

    assert_eq!(sensor, "attic");
    assert_eq!(celsius, 21.5);
    assert_eq!(sequence, 9);
}

#[test]
fn tuple_structs_by_position() {
    let mut left = 0u8;
    let mut right = String::new();
    let _ = tie!(left, right).set(Pair(3u8, "three"));
    assert_eq!((left, right.as_str()), (3, "three"));

    assert_eq!(Pair('a', 'b').element::<1>(), 'b');
}

#[test]
fn generic_and_borrowing_structs() {
    let label = String::from("borrowed");
    let mut out: &String = &String::new();
    let _ = tie!(out).set(Borrowed { label: &label });
    assert_eq!(out, "borrowed");
}

#[test]
fn one_derived_source_for_many_assignments() {
    let readings = [
        Reading {
            sensor: "a",
            celsius: 1.0,
            sequence: 1,
        },
        Reading {
            sensor: "b",
            celsius: 2.0,
            sequence: 2,
        },
    ];
    let mut sensor = "";
    let mut celsius = 0.0f32;
    let mut sequence = 0u32;
    let mut vars = tie!(sensor, celsius, sequence);
    for reading in readings.iter() {
        let _ = vars.set_cloned(reading);
    }
    drop(vars);
    assert_eq!((sensor, celsius, sequence), ("b", 2.0, 2));
}
