/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2 + 3 = 5`, `(10 - 20)/(4 - 2) = -5`, etc.
    FoldConstants,

    /// `-(5) = -5`
    NegateConstant,

    /// `0+a = a`
    /// `a+0 = a`
    /// `a-0 = a`
    /// `0-a = -a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `-(-a) = a`
    DoubleNegation,

    /// `a+(-b) = a-b`
    AddNegative,

    /// `a-(-b) = a+b`
    SubtractNegative,

    /// `(a) = a` when the grouping adds nothing
    CollapseGrouping,

    /// `a-b = a + (-1)*b`
    SubtractAsNegation,

    /// `-a = (-1)*a`
    NegationAsFactor,

    /// `a/b = a * (1/b)` for a constant `b`
    DivisionAsReciprocal,

    /// `a*(b+c) = a*b + a*c`
    DistributeLeft,

    /// `(a+b)*c = a*c + b*c`
    DistributeRight,
}
