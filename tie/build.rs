use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The largest arity for which tests are generated.
const MAX_ARITY: usize = 16;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate tests for every arity up to a bound, so that an impl which only works for
    // small tuples (or is missing for one size) can't go unnoticed.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("arities.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "use crate::bindings::Bindings;")?;
    writeln!(f, "use crate::tuple::Tuple;")?;
    writeln!(f, "use static_assertions::{{assert_impl_all, assert_not_impl_any}};")?;
    writeln!(f)?;

    for arity in 1..=MAX_ARITY {
        let slots = Slot::cycle(arity).collect::<Vec<_>>();
        let vars = Row(&slots, Render::Vars);
        let good = Row(&slots, Render::Sources);
        let short = Row(&slots[..arity - 1], Render::Sources);
        let long = Row(&slots, Render::SourcesAndUnit);
        let bad_last = Row(&slots, Render::BadLast);

        // Acceptance and rejection, at the type level
        writeln!(
            f,
            "assert_impl_all!(<({vars}) as Tuple>::AsList: Bindings<<({good}) as Tuple>::AsList>);",
            vars = vars,
            good = good,
        )?;
        writeln!(
            f,
            "assert_not_impl_any!(<({vars}) as Tuple>::AsList: \
             Bindings<<({short}) as Tuple>::AsList>, \
             Bindings<<({long}) as Tuple>::AsList>, \
             Bindings<<({bad}) as Tuple>::AsList>);",
            vars = vars,
            short = short,
            long = long,
            bad = bad_last,
        )?;
        writeln!(f)?;

        // Positional correctness, at runtime
        writeln!(f, "#[test]")?;
        writeln!(f, "fn arity_{}() {{", arity)?;
        for (i, slot) in slots.iter().enumerate() {
            writeln!(
                f,
                "    let mut v{i}: {ty} = {init};",
                i = i,
                ty = slot.var_type(),
                init = slot.initial(),
            )?;
        }
        write!(f, "    let _ = crate::assign((")?;
        for i in 0..arity {
            write!(f, "&mut v{}, ", i)?;
        }
        write!(f, ")).set((")?;
        for (i, slot) in slots.iter().enumerate() {
            write!(f, "{}, ", slot.value(i))?;
        }
        writeln!(f, "));")?;
        for (i, slot) in slots.iter().enumerate() {
            writeln!(
                f,
                "    assert_eq!(v{i}, {expected});",
                i = i,
                expected = slot.expected(i),
            )?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;
    }
    Ok(())
}

/// The kinds of variable the generated tests bind, each assigned from a different source type.
#[derive(Clone, Copy, Debug)]
enum Slot {
    /// `u64`, assigned from `u32`
    Widened,
    /// `String`, assigned from `&'static str`
    Text,
    /// `char`, assigned from `char`
    Exact,
    /// `i16`, assigned from `i8`
    Signed,
}

impl Slot {
    fn cycle(arity: usize) -> impl Iterator<Item = Slot> {
        use Slot::*;
        [Widened, Text, Exact, Signed].iter().copied().cycle().take(arity)
    }

    fn var_type(self) -> &'static str {
        match self {
            Slot::Widened => "u64",
            Slot::Text => "String",
            Slot::Exact => "char",
            Slot::Signed => "i16",
        }
    }

    fn source_type(self) -> &'static str {
        match self {
            Slot::Widened => "u32",
            Slot::Text => "&'static str",
            Slot::Exact => "char",
            Slot::Signed => "i8",
        }
    }

    fn initial(self) -> &'static str {
        match self {
            Slot::Widened => "0",
            Slot::Text => "String::new()",
            Slot::Exact => "' '",
            Slot::Signed => "0",
        }
    }

    fn value(self, i: usize) -> String {
        match self {
            Slot::Widened => format!("{}u32", i + 1),
            Slot::Text => format!("\"v{}\"", i),
            Slot::Exact => format!("'{}'", (b'a' + i as u8) as char),
            Slot::Signed => format!("-{}i8", i + 1),
        }
    }

    fn expected(self, i: usize) -> String {
        match self {
            Slot::Widened => format!("{}", i + 1),
            Slot::Text => format!("\"v{}\"", i),
            Slot::Exact => format!("'{}'", (b'a' + i as u8) as char),
            Slot::Signed => format!("-{}", i + 1),
        }
    }
}

/// How each slot of a [`Row`] is rendered.
#[derive(Clone, Copy, Debug)]
enum Render {
    /// The bound variables, as `&'static mut` types
    Vars,
    /// A matching source
    Sources,
    /// A matching source with one more element on the end
    SourcesAndUnit,
    /// A matching source, except for a last element which converts into nothing
    BadLast,
}

/// A comma-separated row of types, one per slot. A trailing comma is always written, so that a
/// single-element row is a 1-tuple.
struct Row<'a>(&'a [Slot], Render);

impl<'a> Display for Row<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Row(slots, render) = self;
        for (i, slot) in slots.iter().enumerate() {
            match render {
                Render::Vars => write!(f, "&'static mut {},", slot.var_type())?,
                Render::BadLast if i + 1 == slots.len() => write!(f, "f64,")?,
                Render::Sources | Render::SourcesAndUnit | Render::BadLast => {
                    write!(f, "{},", slot.source_type())?
                }
            }
        }
        if let Render::SourcesAndUnit = render {
            write!(f, "(),")?;
        }
        Ok(())
    }
}
