use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
        }
    }

    /// Returns `None` when the result does not fit in an `i64`.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Plus => lhs.checked_add(rhs),
            Operator::Minus => lhs.checked_sub(rhs),
        }
    }
}

/// One arithmetic problem, optionally carrying the user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    Addition {
        lhs: i64,
        rhs: i64,
        user_input: Option<i64>,
    },
    Subtraction {
        lhs: i64,
        rhs: i64,
        user_input: Option<i64>,
    },
}

impl Exercise {
    pub fn addition(lhs: i64, rhs: i64) -> Self {
        Exercise::Addition {
            lhs,
            rhs,
            user_input: None,
        }
    }

    pub fn subtraction(lhs: i64, rhs: i64) -> Self {
        Exercise::Subtraction {
            lhs,
            rhs,
            user_input: None,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Exercise::Addition { .. } => Operator::Plus,
            Exercise::Subtraction { .. } => Operator::Minus,
        }
    }

    pub fn lhs(&self) -> i64 {
        match *self {
            Exercise::Addition { lhs, .. } | Exercise::Subtraction { lhs, .. } => lhs,
        }
    }

    pub fn rhs(&self) -> i64 {
        match *self {
            Exercise::Addition { rhs, .. } | Exercise::Subtraction { rhs, .. } => rhs,
        }
    }

    pub fn user_input(&self) -> Option<i64> {
        match *self {
            Exercise::Addition { user_input, .. } | Exercise::Subtraction { user_input, .. } => {
                user_input
            }
        }
    }

    pub fn is_answered(&self) -> bool {
        self.user_input().is_some()
    }

    /// The value a correct answer must equal.
    pub fn expected(&self) -> Option<i64> {
        self.operator().apply(self.lhs(), self.rhs())
    }

    /// Returns a copy of `self` carrying `value` as the user's answer.
    pub fn with_user_input(&self, value: i64) -> Self {
        match *self {
            Exercise::Addition { lhs, rhs, .. } => Exercise::Addition {
                lhs,
                rhs,
                user_input: Some(value),
            },
            Exercise::Subtraction { lhs, rhs, .. } => Exercise::Subtraction {
                lhs,
                rhs,
                user_input: Some(value),
            },
        }
    }

    /// False while unanswered.
    pub fn is_correct(&self) -> bool {
        match (self.user_input(), self.expected()) {
            (Some(input), Some(expected)) => input == expected,
            _ => false,
        }
    }

    /// An unanswered exercise is neither correct nor failed.
    pub fn is_failed(&self) -> bool {
        self.is_answered() && !self.is_correct()
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}   {}   {} = ",
            self.lhs(),
            self.operator().symbol(),
            self.rhs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_addition_scoring() {
        let exercise = Exercise::addition(3, 4);
        assert!(exercise.with_user_input(7).is_correct());
        assert!(!exercise.with_user_input(6).is_correct());
    }

    #[test]
    fn test_subtraction_scoring() {
        let exercise = Exercise::subtraction(10, 3);
        assert!(exercise.with_user_input(7).is_correct());
        assert!(!exercise.with_user_input(8).is_correct());
    }

    #[test]
    fn test_subtraction_may_go_negative() {
        let exercise = Exercise::subtraction(3, 10).with_user_input(-7);
        assert!(exercise.is_correct());
    }

    #[test]
    fn test_unanswered_is_neither_correct_nor_failed() {
        let exercise = Exercise::addition(1, 1);
        assert!(!exercise.is_answered());
        assert!(!exercise.is_correct());
        assert!(!exercise.is_failed());
    }

    #[test]
    fn test_with_user_input_returns_copy() {
        let exercise = Exercise::subtraction(20, 5);
        let answered = exercise.with_user_input(15);

        assert_eq!(exercise.user_input(), None);
        assert_eq!(answered.user_input(), Some(15));
        assert_eq!(answered.lhs(), 20);
        assert_eq!(answered.rhs(), 5);
        assert_eq!(answered.operator(), Operator::Minus);
    }

    #[test]
    fn test_overflow_scores_as_failed() {
        let exercise = Exercise::addition(i64::MAX, 1).with_user_input(i64::MIN);
        assert_eq!(exercise.expected(), None);
        assert!(exercise.is_failed());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Exercise::addition(12, 7).to_string(), "12   +   7 = ");
        assert_eq!(Exercise::subtraction(-3, 40).to_string(), "-3   -   40 = ");
    }

    proptest! {
        #[test]
        fn addition_matches_direct_evaluation(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
            c in -20_000i64..20_000,
        ) {
            let answered = Exercise::addition(a, b).with_user_input(c);
            prop_assert_eq!(answered.is_correct(), a + b == c);
            prop_assert_eq!(answered.is_failed(), a + b != c);
        }

        #[test]
        fn subtraction_matches_direct_evaluation(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
            c in -20_000i64..20_000,
        ) {
            let answered = Exercise::subtraction(a, b).with_user_input(c);
            prop_assert_eq!(answered.is_correct(), a - b == c);
        }
    }
}
