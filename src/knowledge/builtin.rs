//! The fixed introductory calculus dataset.

use crate::knowledge::builder::KnowledgeBaseBuilder;
use crate::knowledge::error::KnowledgeBaseError;
use crate::knowledge::store::KnowledgeBase;
use crate::topic::TopicRecord;

/// Keys of the built-in dataset, in registration order.
pub const CALCULUS_TOPICS: [&str; 4] = ["limit", "derivative", "integral", "series"];

fn limit() -> TopicRecord {
    TopicRecord::new(
        "Definition and Properties of Limits",
        "1. Limit of a sequence (ε-N): for every ε>0 there is N∈ℕ₊ such that |xₙ - a| < ε whenever n>N; then limₙ→∞ xₙ = a.\n\
         2. Limit of a function (ε-δ): for every ε>0 there is δ>0 such that |f(x) - A| < ε whenever 0<|x - x₀| < δ; then limₓ→x₀ f(x) = A.\n\
         3. Core properties: uniqueness, local boundedness, local sign preservation, the squeeze theorem, the monotone convergence theorem.",
        "Example: prove limₓ→2 (x² - 4)/(x - 2) = 4<br>\
         Solution:<br>\
         1. Simplify: (x² - 4)/(x - 2) = x + 2 for x≠2;<br>\
         2. For every ε>0 we need |(x + 2) - 4| = |x - 2| < ε, so take δ=ε;<br>\
         3. Whenever 0<|x - 2| < δ we have |f(x) - 4| < ε, hence the limit is 4.",
        "1. Prove limₙ→∞ (n+1)/(2n) = 1/2 with the ε-N definition; 2. Find limₓ→0 sin(3x)/x (hint: equivalent infinitesimals)",
    )
}

fn derivative() -> TopicRecord {
    TopicRecord::new(
        "Definition and Rules of Differentiation",
        "1. Definition: f'(x₀) = limₕ→0 [f(x₀+h) - f(x₀)]/h, or equivalently limₓ→x₀ [f(x) - f(x₀)]/(x - x₀).\n\
         2. Rules: sum, product and quotient rules, the chain rule for composite functions, implicit differentiation, parametric differentiation.\n\
         3. Common derivatives: (sin x)' = cos x, (ln x)' = 1/x, (eˣ)' = eˣ, (xⁿ)' = nxⁿ⁻¹.",
        "Example: differentiate y = sin(2x + 3)<br>\
         Solution:<br>\
         1. Write it as a composite: u = 2x + 3, y = sin u;<br>\
         2. Chain rule: dy/dx = (dy/du)·(du/dx) = cos u · 2 = 2cos(2x + 3).",
        "1. Differentiate y = x² ln x; 2. Prove (cos x)' = -sin x from the definition of the derivative",
    )
}

fn integral() -> TopicRecord {
    TopicRecord::new(
        "Definite and Indefinite Integrals",
        "1. Indefinite integral: ∫f(x)dx = F(x) + C where F'(x) = f(x) (the family of antiderivatives).\n\
         2. Definite (Riemann) integral: ∫ₐᵇ f(x)dx = limₙ→∞ Σᵢ₌₁ⁿ f(ξᵢ)Δxᵢ with Δxᵢ = (b-a)/n and ξᵢ∈[xᵢ₋₁, xᵢ].\n\
         3. Newton-Leibniz formula: ∫ₐᵇ f(x)dx = F(b) - F(a) where F is an antiderivative of f.",
        "Example: compute ∫₀¹ x²dx<br>\
         Solution:<br>\
         1. Antiderivative: ∫x²dx = (1/3)x³ + C;<br>\
         2. Newton-Leibniz: (1/3)(1³ - 0³) = 1/3.",
        "1. Compute ∫sin 2x dx; 2. Compute ∫₁ᵉ (1 + ln x)/x dx (hint: substitute u = 1 + ln x)",
    )
}

fn series() -> TopicRecord {
    TopicRecord::new(
        "Numerical Series and Power Series",
        "1. Convergence: the series Σaₙ converges if limₙ→∞ Sₙ = S where Sₙ = Σᵢ₌₁ⁿ aᵢ.\n\
         2. Convergence tests: positive series (comparison test, ratio test), alternating series (Leibniz test).\n\
         3. Radius of convergence of a power series: R = 1/limₙ→∞ |aₙ₊₁/aₙ| (ratio method); the interval of convergence is (-R, R).",
        "Example: decide whether Σₙ₌₁^∞ 1/n² converges<br>\
         Solution:<br>\
         1. It is a positive series and 1/n² ≤ 1/(n(n-1)) for n≥2;<br>\
         2. Σₙ₌₂^∞ 1/(n(n-1)) = Σₙ₌₂^∞ [1/(n-1) - 1/n] telescopes, with partial sums Sₙ = 1 - 1/n → 1, so it converges;<br>\
         3. By the comparison test Σ 1/n² converges.",
        "1. Decide whether Σₙ₌₁^∞ 1/√n converges; 2. Find the radius and interval of convergence of Σₙ₌₁^∞ xⁿ/n",
    )
}

/// Build the built-in knowledge base: `limit`, `derivative`, `integral`,
/// `series`, registered in that order.
pub fn try_calculus() -> Result<KnowledgeBase, KnowledgeBaseError> {
    let mut builder = KnowledgeBaseBuilder::new();
    let records = [limit(), derivative(), integral(), series()];

    for (key, record) in CALCULUS_TOPICS.into_iter().zip(records) {
        builder.register(key, record)?;
    }

    Ok(builder.build())
}

/// Infallible form of [`try_calculus`].
pub fn calculus() -> KnowledgeBase {
    match try_calculus() {
        Ok(knowledge) => knowledge,
        // Keys are static, lowercase, alphanumeric and distinct.
        Err(e) => unreachable!("built-in calculus topics failed to register: {e}"),
    }
}
