use crate::*;

/// Classification of a line by its leading word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Action {
    #[display("create")]
    Create,
    #[display("alter")]
    Alter,
    #[display("drop")]
    Drop,
    #[display("truncate")]
    Truncate,
    #[display("delete")]
    Delete,
    #[display("other")]
    Other,
}

impl Action {
    /// Actions that have a rule attached.
    pub const CHECKED: [Self; 5] = [
        Action::Create,
        Action::Alter,
        Action::Drop,
        Action::Truncate,
        Action::Delete,
    ];

    /// Classify a *lower-cased* word. Anything unknown is `Other`.
    pub fn from_lower(word: &str) -> Self {
        use Action::*;
        match word {
            "create" => Create,
            "alter" => Alter,
            "drop" => Drop,
            "truncate" => Truncate,
            "delete" => Delete,
            _ => Other,
        }
    }

    /// Action of a whole line; an empty line is `Other`.
    pub fn classify(tokens: &TokenSequence) -> Self {
        tokens
            .word(0)
            .map(Self::from_lower)
            .unwrap_or(Action::Other)
    }

    /// True for the schema-mutating actions.
    pub fn is_ddl(self) -> bool {
        matches!(
            self,
            Action::Create | Action::Alter | Action::Drop | Action::Truncate
        )
    }

    /// The rule evaluated for lines starting with this action.
    pub fn rule(self) -> Option<Rule> {
        use Action::*;
        let rule = match self {
            Create => Rule::Ddl(TablePattern::CREATE),
            Alter => Rule::Ddl(TablePattern::ALTER),
            Drop => Rule::Ddl(TablePattern::DROP),
            Truncate => Rule::Ddl(TablePattern::TRUNCATE),
            Delete => Rule::Delete(TablePattern::DELETE),
            Other => return None,
        };
        Some(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    #[case("CREATE TABLE t (id INT)", Action::Create)]
    #[case("alter table t add column x int", Action::Alter)]
    #[case("Drop table t", Action::Drop)]
    #[case("truncate t", Action::Truncate)]
    #[case("DELETE FROM t", Action::Delete)]
    #[case("select * from t", Action::Other)]
    #[case("  ; ", Action::Other)]
    #[case("", Action::Other)]
    #[case("-- drop table users", Action::Drop)]
    #[case("created_at = now()", Action::Other)]
    fn classifies_leading_word(#[case] line: &str, #[case] expected: Action) {
        assert_eq!(Action::classify(&tokenize(line)), expected);
    }

    #[test]
    fn every_checked_action_has_a_rule() {
        for action in Action::CHECKED {
            assert!(action.rule().is_some(), "{action} should have a rule");
            assert_eq!(Action::from_lower(&action.to_string()), action);
        }
        assert!(Action::Other.rule().is_none());
    }

    #[test]
    fn ddl_actions_use_table_rules() {
        for action in Action::CHECKED {
            let is_table_rule = matches!(action.rule(), Some(Rule::Ddl(_)));
            assert_eq!(action.is_ddl(), is_table_rule, "{action}");
        }
    }
}
