use quickcheck::{quickcheck, TestResult};
use tie::prelude::*;

#[test]
fn positional_correctness() {
    fn prop(a: i64, b: String, c: Vec<u8>, d: (bool, char)) -> bool {
        let mut va = 0i64;
        let mut vb = String::new();
        let mut vc: Vec<u8> = Vec::new();
        let mut vd = (false, ' ');
        let _ = tie!(va, vb, vc, vd).set((a, b.clone(), c.clone(), d));
        va == a && vb == b && vc == c && vd == d
    }
    quickcheck(prop as fn(i64, String, Vec<u8>, (bool, char)) -> bool);
}

#[test]
fn widening_conversions_preserve_values() {
    fn prop(a: u8, b: i16, c: u32, d: char) -> bool {
        let mut va = 0u64;
        let mut vb = 0i64;
        let mut vc = 0u128;
        let mut vd = String::new();
        let _ = tie!(va, vb, vc, vd).set((a, b, c, d));
        va == u64::from(a) && vb == i64::from(b) && vc == u128::from(c) && vd == d.to_string()
    }
    quickcheck(prop as fn(u8, i16, u32, char) -> bool);
}

#[test]
fn latest_source_wins() {
    fn prop(first: (u32, String), second: (u32, String)) -> bool {
        let mut n = 0;
        let mut s = String::new();
        let mut vars = tie!(n, s);
        let _ = vars.set(first).set(second.clone());
        drop(vars);
        (n, s) == second
    }
    quickcheck(prop as fn((u32, String), (u32, String)) -> bool);
}

#[test]
fn swapping_bindings_swaps_values() {
    fn prop(x: i32, y: i32) -> TestResult {
        if x == y {
            return TestResult::discard();
        }
        let (mut a, mut b) = (0, 0);
        let _ = tie!(b, a).set((x, y));
        TestResult::from_bool(a == y && b == x)
    }
    quickcheck(prop as fn(i32, i32) -> TestResult);
}

#[test]
fn arrays_fill_in_index_order() {
    fn prop(values: (u16, u16, u16, u16)) -> bool {
        let source = [values.0, values.1, values.2, values.3];
        let (mut a, mut b, mut c, mut d) = (0u32, 0u32, 0u32, 0u32);
        let _ = tie!(a, b, c, d).set(source);
        [a, b, c, d] == source.map(u32::from)
    }
    quickcheck(prop as fn((u16, u16, u16, u16)) -> bool);
}
