//! Built-in spoken-word mappings for LaTeX commands
//!
//! These tables seed the default substitution dictionary. The entries cover
//! Greek letters, common math relations and operators, and the blackboard-bold
//! set names. An external JSON dictionary can extend or override them at load
//! time (see `data::dictionary`).

use lazy_static::lazy_static;
use phf::phf_map;
use std::collections::HashMap;

/// Greek letter command names (without backslash) and their spoken forms.
///
/// The `var*` variants speak the same as their base letter. Capitalized
/// commands (`\Omega`) are not listed here; they are derived at conversion
/// time as "capital <letter>" so the case distinction is audible.
pub static GREEK_LETTERS: phf::Map<&'static str, &'static str> = phf_map! {
    "alpha" => "alpha",
    "beta" => "beta",
    "gamma" => "gamma",
    "delta" => "delta",
    "epsilon" => "epsilon",
    "varepsilon" => "epsilon",
    "zeta" => "zeta",
    "eta" => "eta",
    "theta" => "theta",
    "vartheta" => "theta",
    "iota" => "iota",
    "kappa" => "kappa",
    "lambda" => "lambda",
    "mu" => "mu",
    "nu" => "nu",
    "xi" => "xi",
    "omicron" => "omicron",
    "pi" => "pi",
    "varpi" => "pi",
    "rho" => "rho",
    "varrho" => "rho",
    "sigma" => "sigma",
    "varsigma" => "sigma",
    "tau" => "tau",
    "upsilon" => "upsilon",
    "phi" => "phi",
    "varphi" => "phi",
    "chi" => "chi",
    "psi" => "psi",
    "omega" => "omega",
};

/// Blackboard-bold set names: `\mathbb{R}` speaks as "the reals".
pub static BLACKBOARD_SETS: phf::Map<&'static str, &'static str> = phf_map! {
    "R" => "the reals",
    "N" => "the naturals",
    "Z" => "the integers",
    "Q" => "the rationals",
    "C" => "the complex numbers",
};

lazy_static! {
    /// Math relations, operators, and misc symbol commands.
    /// Keys carry the backslash, matching the external dictionary format.
    pub static ref MATH_SYMBOLS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Relations
        m.insert("\\leq", "less than or equal to");
        m.insert("\\le", "less than or equal to");
        m.insert("\\geq", "greater than or equal to");
        m.insert("\\ge", "greater than or equal to");
        m.insert("\\neq", "not equal to");
        m.insert("\\ne", "not equal to");
        m.insert("\\approx", "approximately equal to");
        m.insert("\\equiv", "is equivalent to");
        m.insert("\\sim", "is similar to");
        m.insert("\\propto", "is proportional to");
        m.insert("\\in", "element of");
        m.insert("\\notin", "not an element of");
        m.insert("\\subset", "subset of");
        m.insert("\\supset", "superset of");
        m.insert("\\subseteq", "subset of or equal to");
        m.insert("\\supseteq", "superset of or equal to");
        m.insert("\\perp", "perpendicular to");
        m.insert("\\parallel", "parallel to");
        m.insert("\\mid", "such that");

        // Arrows and logic
        m.insert("\\to", "approaches");
        m.insert("\\rightarrow", "approaches");
        m.insert("\\mapsto", "maps to");
        m.insert("\\Rightarrow", "implies");
        m.insert("\\implies", "implies");
        m.insert("\\Leftarrow", "is implied by");
        m.insert("\\iff", "if and only if");
        m.insert("\\Leftrightarrow", "if and only if");
        m.insert("\\forall", "for all");
        m.insert("\\exists", "there exists");
        m.insert("\\neg", "not");
        m.insert("\\land", "and");
        m.insert("\\wedge", "and");
        m.insert("\\lor", "or");
        m.insert("\\vee", "or");
        m.insert("\\therefore", "therefore");
        m.insert("\\because", "because");

        // Arithmetic and set operations
        m.insert("\\pm", "plus or minus");
        m.insert("\\mp", "minus or plus");
        m.insert("\\times", "times");
        m.insert("\\cdot", "times");
        m.insert("\\div", "divided by");
        m.insert("\\cup", "union");
        m.insert("\\cap", "intersection");
        m.insert("\\setminus", "set minus");
        m.insert("\\emptyset", "empty set");
        m.insert("\\varnothing", "empty set");

        // Big operators and calculus
        m.insert("\\sum", "the sum of");
        m.insert("\\prod", "the product of");
        m.insert("\\int", "the integral of");
        m.insert("\\oint", "the contour integral of");
        m.insert("\\partial", "partial");
        m.insert("\\nabla", "nabla");
        m.insert("\\lim", "the limit of");
        m.insert("\\max", "the maximum of");
        m.insert("\\min", "the minimum of");
        m.insert("\\sup", "the supremum of");
        m.insert("\\inf", "the infimum of");

        // Named functions
        m.insert("\\log", "log");
        m.insert("\\ln", "natural log");
        m.insert("\\exp", "the exponential of");
        m.insert("\\sin", "sine");
        m.insert("\\cos", "cosine");
        m.insert("\\tan", "tangent");

        // Misc
        m.insert("\\infty", "infinity");
        m.insert("\\cdots", "dot dot dot");
        m.insert("\\ldots", "dot dot dot");
        m.insert("\\dots", "dot dot dot");
        m.insert("\\vdots", "dot dot dot");
        m.insert("\\prime", "prime");
        m.insert("\\degree", "degrees");
        m.insert("\\angle", "angle");
        m.insert("\\hbar", "h bar");
        m.insert("\\ell", "ell");
        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_lowercase_present() {
        assert_eq!(GREEK_LETTERS.get("alpha"), Some(&"alpha"));
        assert_eq!(GREEK_LETTERS.get("omega"), Some(&"omega"));
    }

    #[test]
    fn test_var_forms_speak_base_letter() {
        assert_eq!(GREEK_LETTERS.get("varepsilon"), Some(&"epsilon"));
        assert_eq!(GREEK_LETTERS.get("varsigma"), Some(&"sigma"));
    }

    #[test]
    fn test_no_capitalized_keys() {
        assert!(GREEK_LETTERS
            .keys()
            .all(|k| k.chars().next().is_some_and(|c| c.is_lowercase())));
    }

    #[test]
    fn test_prefix_pairs_agree() {
        // \le and \leq must speak identically so longest-munch ordering
        // can never change the meaning.
        assert_eq!(MATH_SYMBOLS["\\le"], MATH_SYMBOLS["\\leq"]);
        assert_eq!(MATH_SYMBOLS["\\ge"], MATH_SYMBOLS["\\geq"]);
        assert_eq!(MATH_SYMBOLS["\\ne"], MATH_SYMBOLS["\\neq"]);
    }

    #[test]
    fn test_blackboard_sets() {
        assert_eq!(BLACKBOARD_SETS.get("R"), Some(&"the reals"));
        assert!(BLACKBOARD_SETS.get("X").is_none());
    }
}
