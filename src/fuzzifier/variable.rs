use crate::membership::MembershipFunction;

/// A modality of a fuzzy variable
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    name: String,
    function: MembershipFunction,
    /// Degree of each universe point, same order as the universe
    degrees: Vec<f64>,
}

impl Term {
    pub(crate) fn new(name: String, function: MembershipFunction, universe: &[f64]) -> Self {
        Self {
            name,
            function,
            degrees: function.evaluate_all(universe),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &MembershipFunction {
        &self.function
    }

    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Exact shape evaluation at `x`, no interpolation
    pub fn evaluate(&self, x: f64) -> f64 {
        self.function.evaluate(x)
    }
}

/// A feature, its universe and its modalities
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyVariable {
    name: String,
    /// Feature values in row order
    universe: Vec<f64>,
    min: f64,
    max: f64,
    terms: Vec<Term>,
}

impl FuzzyVariable {
    pub(crate) fn new(name: String, universe: Vec<f64>) -> Self {
        let (min, max) = universe
            .iter()
            .filter(|x| !x.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Self {
            name,
            universe,
            min,
            max,
            terms: Vec::new(),
        }
    }

    /// Add (or replace) a modality, evaluating it over the universe.
    pub(crate) fn add_term(&mut self, name: String, function: MembershipFunction) {
        let term = Term::new(name, function, &self.universe);
        match self.terms.iter_mut().find(|t| t.name == term.name) {
            Some(existing) => *existing = term,
            None => self.terms.push(term),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    /// Observed `(min, max)` of the universe, NaNs ignored
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, name: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.name == name)
    }

    pub fn term_names(&self) -> Vec<&str> {
        self.terms.iter().map(|t| t.name.as_str()).collect()
    }

    /// Number of modalities
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_ignores_nan() {
        let var = FuzzyVariable::new("x".to_string(), vec![3.0, f64::NAN, -1.0, 8.0]);
        assert_eq!(var.range(), (-1.0, 8.0));
        assert_eq!(var.universe().len(), 4);
    }

    #[test]
    fn test_terms_match_universe_length() {
        let mut var = FuzzyVariable::new("x".to_string(), vec![0.0, 5.0, 10.0]);
        var.add_term("mid".to_string(), MembershipFunction::Triangular(0.0, 5.0, 10.0));
        let term = var.term("mid").unwrap();
        assert_eq!(term.degrees(), &[0.0, 1.0, 0.0]);
        assert_eq!(term.degrees().len(), var.universe().len());
        assert_eq!(term.evaluate(2.5), 0.5);
    }

    #[test]
    fn test_add_term_replaces_same_name() {
        let mut var = FuzzyVariable::new("x".to_string(), vec![0.0, 10.0]);
        var.add_term("a".to_string(), MembershipFunction::Triangular(0.0, 0.0, 10.0));
        var.add_term("a".to_string(), MembershipFunction::Triangular(0.0, 10.0, 10.0));
        assert_eq!(var.len(), 1);
        assert_eq!(var.term("a").unwrap().degrees(), &[0.0, 1.0]);
    }
}
