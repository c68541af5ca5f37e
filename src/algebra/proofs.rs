//! Law witnesses. Runtime-checkable arrow laws over concrete inputs.
//!
//! Each witness runs both sides of one law, keeps what it saw, and reports
//! whether the sides agreed. Operands are borrowed and cloned where a law
//! needs to build a composite, so callers keep their arrows.

use crate::algebra::composition::Compose;
use crate::core::arrow::{identity, make, Arrow};
use crate::core::computation::Computation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Law {
    /// make(f).apply(x) = f(x)
    Identity = 0,
    /// (id >> a) = a = (a >> id)
    Unit = 1,
    /// (a >> b).apply(x) = b.apply(a.apply(x))
    Composition = 2,
    /// ((a >> b) >> c) = (a >> (b >> c))
    Associativity = 3,
    /// first(a).apply((x, y)) = (a.apply(x), y)
    FirstBypass = 4,
    /// second(a).apply((y, x)) = (y, a.apply(x))
    SecondBypass = 5,
    /// first_same_type(a) = first::<In>(a), same for second
    DefaultBypass = 6,
    /// two compositions of the same operands never interfere
    Independence = 7,
}

pub const LAW_COUNT: usize = 8;

impl Law {
    pub const ALL: [Law; LAW_COUNT] = [
        Law::Identity,
        Law::Unit,
        Law::Composition,
        Law::Associativity,
        Law::FirstBypass,
        Law::SecondBypass,
        Law::DefaultBypass,
        Law::Independence,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Law::Identity => "identity",
            Law::Unit => "unit",
            Law::Composition => "composition",
            Law::Associativity => "associativity",
            Law::FirstBypass => "first-bypass",
            Law::SecondBypass => "second-bypass",
            Law::DefaultBypass => "default-bypass",
            Law::Independence => "independence",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentityProof<In, Out> {
    pub input: In,
    pub direct: Out,
    pub through_arrow: Out,
    pub holds: bool,
}

impl<In: Clone, Out: PartialEq> IdentityProof<In, Out> {
    pub fn verify<F>(f: F, input: In) -> Self
    where
        F: Computation<In, Output = Out>,
    {
        let direct = f.call(input.clone());
        let through_arrow = make(f).apply(input.clone());
        let holds = direct == through_arrow;

        Self {
            input,
            direct,
            through_arrow,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

#[derive(Debug, Clone)]
pub struct UnitProof<In, Out> {
    pub input: In,
    pub plain: Out,
    pub left_unit: Out,  // id >> a
    pub right_unit: Out, // a >> id
    pub holds: bool,
}

impl<In: Clone, Out: PartialEq> UnitProof<In, Out> {
    pub fn verify<F>(a: &Arrow<In, Out, F>, input: In) -> Self
    where
        F: Computation<In, Output = Out> + Clone,
    {
        let plain = a.apply(input.clone());
        let left_unit = (identity() >> a.clone()).apply(input.clone());
        let right_unit = (a.clone() >> identity()).apply(input.clone());
        let holds = plain == left_unit && plain == right_unit;

        Self {
            input,
            plain,
            left_unit,
            right_unit,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

#[derive(Debug, Clone)]
pub struct CompositionProof<In, Out> {
    pub input: In,
    pub stepwise: Out,
    pub composed: Out,
    pub holds: bool,
}

impl<In: Clone, Out: PartialEq> CompositionProof<In, Out> {
    pub fn verify<Mid, F, G>(a: &Arrow<In, Mid, F>, b: &Arrow<Mid, Out, G>, input: In) -> Self
    where
        F: Computation<In, Output = Mid> + Clone,
        G: Computation<Mid, Output = Out> + Clone,
    {
        let stepwise = b.apply(a.apply(input.clone()));
        let composed = a.clone().compose(b.clone()).apply(input.clone());
        let holds = stepwise == composed;

        Self {
            input,
            stepwise,
            composed,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

#[derive(Debug, Clone)]
pub struct AssociativityProof<In, Out> {
    pub input: In,
    pub ab_c: Out, // (a >> b) >> c
    pub a_bc: Out, // a >> (b >> c)
    pub holds: bool,
}

impl<In: Clone, Out: PartialEq> AssociativityProof<In, Out> {
    pub fn verify<B, C, F, G, H>(
        a: &Arrow<In, B, F>,
        b: &Arrow<B, C, G>,
        c: &Arrow<C, Out, H>,
        input: In,
    ) -> Self
    where
        F: Computation<In, Output = B> + Clone,
        G: Computation<B, Output = C> + Clone,
        H: Computation<C, Output = Out> + Clone,
    {
        let left: Arrow<In, Out, Compose<Compose<F, G>, H>> = (a.clone() >> b.clone()) >> c.clone();
        let right: Arrow<In, Out, Compose<F, Compose<G, H>>> = a.clone() >> (b.clone() >> c.clone());

        let ab_c = left.apply(input.clone());
        let a_bc = right.apply(input.clone());
        let holds = ab_c == a_bc;

        Self {
            input,
            ab_c,
            a_bc,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BypassSide {
    First,
    Second,
}

#[derive(Debug, Clone)]
pub struct BypassProof<In, B, Out> {
    pub side: BypassSide,
    pub input: In,
    pub bypass: B,
    pub expected: Out,
    pub lifted: Out,
    pub bypass_after: B,
    pub holds: bool,
}

impl<In: Clone, B: Clone + PartialEq, Out: PartialEq> BypassProof<In, B, Out> {
    pub fn verify_first<F>(a: &Arrow<In, Out, F>, input: In, bypass: B) -> Self
    where
        F: Computation<In, Output = Out> + Clone,
    {
        let expected = a.apply(input.clone());
        let (lifted, bypass_after) = a
            .clone()
            .first::<B>()
            .apply((input.clone(), bypass.clone()));

        Self::settle(BypassSide::First, input, bypass, expected, lifted, bypass_after)
    }

    pub fn verify_second<F>(a: &Arrow<In, Out, F>, input: In, bypass: B) -> Self
    where
        F: Computation<In, Output = Out> + Clone,
    {
        let expected = a.apply(input.clone());
        let (bypass_after, lifted) = a
            .clone()
            .second::<B>()
            .apply((bypass.clone(), input.clone()));

        Self::settle(BypassSide::Second, input, bypass, expected, lifted, bypass_after)
    }

    fn settle(side: BypassSide, input: In, bypass: B, expected: Out, lifted: Out, bypass_after: B) -> Self {
        let holds = expected == lifted && bypass == bypass_after;
        Self {
            side,
            input,
            bypass,
            expected,
            lifted,
            bypass_after,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// `first_same_type`/`second_same_type` against the explicit `::<In>` forms.
#[derive(Debug, Clone)]
pub struct DefaultBypassProof<In, Out> {
    pub pair: (In, In),
    pub first_explicit: (Out, In),
    pub first_default: (Out, In),
    pub second_explicit: (In, Out),
    pub second_default: (In, Out),
    pub holds: bool,
}

impl<In: Clone + PartialEq, Out: PartialEq> DefaultBypassProof<In, Out> {
    pub fn verify<F>(a: &Arrow<In, Out, F>, pair: (In, In)) -> Self
    where
        F: Computation<In, Output = Out> + Clone,
    {
        let first_explicit = a.clone().first::<In>().apply(pair.clone());
        let first_default = a.clone().first_same_type().apply(pair.clone());
        let second_explicit = a.clone().second::<In>().apply(pair.clone());
        let second_default = a.clone().second_same_type().apply(pair.clone());

        let holds = first_explicit == first_default && second_explicit == second_default;

        Self {
            pair,
            first_explicit,
            first_default,
            second_explicit,
            second_default,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Builds `a >> b` twice and interleaves calls on both copies.
#[derive(Debug, Clone)]
pub struct IndependenceProof<In, Out> {
    pub input: In,
    pub outputs: [Out; 4],
    pub holds: bool,
}

impl<In: Clone, Out: PartialEq> IndependenceProof<In, Out> {
    pub fn verify<Mid, F, G>(a: &Arrow<In, Mid, F>, b: &Arrow<Mid, Out, G>, input: In) -> Self
    where
        F: Computation<In, Output = Mid> + Clone,
        G: Computation<Mid, Output = Out> + Clone,
    {
        let one = a.clone() >> b.clone();
        let two = a.clone() >> b.clone();

        let outputs = [
            one.apply(input.clone()),
            two.apply(input.clone()),
            two.apply(input.clone()),
            one.apply(input.clone()),
        ];
        let holds = outputs.iter().all(|o| *o == outputs[0]);

        Self {
            input,
            outputs,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Every law at once for one chain `a >> b >> c` (fixed-size, no_std).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawReport {
    pub results: [(Law, bool); LAW_COUNT],
}

impl LawReport {
    pub fn verify<A, B, C, D, Y, F, G, H>(
        a: &Arrow<A, B, F>,
        b: &Arrow<B, C, G>,
        c: &Arrow<C, D, H>,
        input: A,
        bypass: Y,
    ) -> Self
    where
        A: Clone + PartialEq,
        B: PartialEq,
        C: PartialEq,
        D: PartialEq,
        Y: Clone + PartialEq,
        F: Computation<A, Output = B> + Clone,
        G: Computation<B, Output = C> + Clone,
        H: Computation<C, Output = D> + Clone,
    {
        let x = input;
        let results = [
            (
                Law::Identity,
                IdentityProof::verify(a.computation().clone(), x.clone()).is_valid(),
            ),
            (Law::Unit, UnitProof::verify(a, x.clone()).is_valid()),
            (
                Law::Composition,
                CompositionProof::verify(a, b, x.clone()).is_valid(),
            ),
            (
                Law::Associativity,
                AssociativityProof::verify(a, b, c, x.clone()).is_valid(),
            ),
            (
                Law::FirstBypass,
                BypassProof::verify_first(a, x.clone(), bypass.clone()).is_valid(),
            ),
            (
                Law::SecondBypass,
                BypassProof::verify_second(a, x.clone(), bypass).is_valid(),
            ),
            (
                Law::DefaultBypass,
                DefaultBypassProof::verify(a, (x.clone(), x.clone())).is_valid(),
            ),
            (
                Law::Independence,
                IndependenceProof::verify(a, b, x).is_valid(),
            ),
        ];

        Self { results }
    }

    pub fn holds(&self, law: Law) -> bool {
        self.results
            .iter()
            .find(|(l, _)| *l == law)
            .map(|(_, ok)| *ok)
            .unwrap_or(false)
    }

    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, ok)| *ok)
    }

    /// First law that failed, if any.
    pub fn first_violation(&self) -> Option<Law> {
        self.results.iter().find(|(_, ok)| !ok).map(|(l, _)| *l)
    }
}
