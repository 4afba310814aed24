//! Per-action rules that turn a tokenized line into a `Verdict`.
//!
//! DDL statements (`create`, `alter`, `drop`, `truncate`) may only touch
//! tables carrying the temporary prefix. `delete` must mention `where`
//! somewhere on the line. Every other line is accepted.
crate::reexport!(action);
crate::reexport!(pattern);
crate::reexport!(policy);
crate::reexport!(verdict);
use crate::*;

/// Check attached to an `Action`, carrying the table position it relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The located table name must be temporary.
    Ddl(TablePattern),
    /// The line must contain `where`. The pattern is only used for logging.
    Delete(TablePattern),
}

impl Rule {
    pub fn check(
        &self,
        action: Action,
        policy: &Policy,
        tokens: &TokenSequence,
        raw_line: &str,
    ) -> Option<ViolationKind> {
        match self {
            Rule::Ddl(pattern) => check_table(action, pattern, policy, tokens),
            Rule::Delete(pattern) => check_delete(pattern, tokens, raw_line),
        }
    }
}

fn check_table(
    action: Action,
    pattern: &TablePattern,
    policy: &Policy,
    tokens: &TokenSequence,
) -> Option<ViolationKind> {
    debug_assert!(action.is_ddl());
    let Some(table) = pattern.locate(tokens) else {
        let index = pattern.index(tokens);
        warn!(%action, index, tokens = tokens.len(), "Statement ends before its table name");
        return Some(ViolationKind::MalformedStatement {
            action,
            index,
            tokens: tokens.len(),
        });
    };

    if policy.is_temporary(table.as_str()) {
        trace!(%action, %table, "Temporary table");
        return None;
    }
    debug!(%action, %table, span = ?table.span(), "Non-temporary table");
    Some(ViolationKind::NonTemporaryTable {
        action,
        table: table.to_string(),
    })
}

fn check_delete(
    pattern: &TablePattern,
    tokens: &TokenSequence,
    raw_line: &str,
) -> Option<ViolationKind> {
    let table = pattern.locate(tokens).map(Token::as_str);
    // Substring match, `where` is not required to be its own word.
    if raw_line.to_lowercase().contains("where") {
        trace!(?table, "Delete is qualified");
        return None;
    }
    debug!(?table, "Delete without where");
    Some(ViolationKind::DeleteWithoutWhere)
}

impl Policy {
    /// Judge one line. `tokens` must come from `tokenize(raw_line)`.
    pub fn evaluate(
        &self,
        tokens: &TokenSequence,
        line_number: usize,
        raw_line: &str,
    ) -> Verdict {
        let action = Action::classify(tokens);
        let Some(rule) = action.rule() else {
            return Verdict::Ok;
        };

        match rule.check(action, self, tokens, raw_line) {
            None => Verdict::Ok,
            Some(kind) => Verdict::Violation(Violation {
                kind,
                line_number,
                line: raw_line.to_string(),
            }),
        }
    }
}

/// `Policy::evaluate` with the default `tmp` prefix.
pub fn evaluate(tokens: &TokenSequence, line_number: usize, raw_line: &str) -> Verdict {
    Policy::default().evaluate(tokens, line_number, raw_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    #[case("DELETE FROM tmp_orders WHERE id = 1")]
    #[case("delete from orders where id in (1, 2)")]
    #[case("DELETE LOW_PRIORITY QUICK IGNORE FROM orders WHERE id = 1")]
    #[case("CREATE TABLE tmp_staging (id INT)")]
    #[case("CREATE TEMPORARY TABLE IF NOT EXISTS tmp_x (id INT)")]
    #[case("CREATE TABLE IF NOT EXISTS tmp_y (id INT)")]
    #[case("DROP TABLE IF EXISTS tmp_cache")]
    #[case("DROP TEMPORARY TABLE tmp_cache")]
    #[case("TRUNCATE tmp_logs")]
    #[case("TRUNCATE TABLE tmp_logs;")]
    #[case("ALTER TABLE tmp_users ADD COLUMN age INT")]
    #[case("ALTER TABLE TMP_Users ADD COLUMN age INT")]
    fn accepts(#[case] line: &str) {
        assert_eq!(verdict(line), Verdict::Ok, "{line}");
    }

    #[rstest]
    #[case("DELETE FROM orders")]
    #[case("delete from orders;")]
    #[case("DELETE QUICK FROM tmp_orders")]
    fn rejects_unqualified_delete(#[case] line: &str) {
        let v = verdict(line).into_violation().expect("violation");
        assert_eq!(v.kind, ViolationKind::DeleteWithoutWhere);
        assert_eq!(v.line, line);
        assert_eq!(v.line_number, 1);
    }

    #[rstest]
    #[case("CREATE TABLE users (id INT)", Action::Create, "users")]
    #[case("create temporary table if not exists users (id int)", Action::Create, "users")]
    #[case("DROP TABLE IF EXISTS cache", Action::Drop, "cache")]
    #[case("drop temporary table sessions", Action::Drop, "sessions")]
    #[case("TRUNCATE TABLE prod_logs", Action::Truncate, "prod_logs")]
    #[case("truncate prod_logs", Action::Truncate, "prod_logs")]
    #[case("ALTER TABLE users ADD COLUMN tmp_flag INT", Action::Alter, "users")]
    fn rejects_non_temporary_tables(
        #[case] line: &str,
        #[case] action: Action,
        #[case] table: &str,
    ) {
        let v = verdict(line).into_violation().expect("violation");
        assert_eq!(
            v.kind,
            ViolationKind::NonTemporaryTable {
                action,
                table: table.to_string()
            }
        );
        assert_eq!(
            v.to_string(),
            format!("illegal action on non-temporary table at line 1: {line}")
        );
    }

    #[rstest]
    #[case("CREATE", Action::Create, 2, 1)]
    #[case("create table", Action::Create, 2, 2)]
    #[case("DROP TABLE", Action::Drop, 2, 2)]
    #[case("drop table if exists", Action::Drop, 4, 4)]
    #[case("truncate;", Action::Truncate, 1, 1)]
    #[case("ALTER TABLE", Action::Alter, 2, 2)]
    fn reports_short_ddl_as_malformed(
        #[case] line: &str,
        #[case] action: Action,
        #[case] index: usize,
        #[case] tokens: usize,
    ) {
        let v = verdict(line).into_violation().expect("violation");
        assert_eq!(
            v.kind,
            ViolationKind::MalformedStatement {
                action,
                index,
                tokens
            }
        );
    }

    #[test]
    fn short_delete_is_not_malformed() {
        let v = verdict("delete").into_violation().expect("violation");
        assert_eq!(v.kind, ViolationKind::DeleteWithoutWhere);
        assert!(verdict("delete where").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(";")]
    #[case("SELECT * FROM users")]
    #[case("INSERT INTO users VALUES (1)")]
    #[case("UPDATE users SET name = 'x'")]
    #[case("created TABLE users")]
    #[case("deleted FROM users")]
    fn ignores_other_statements(#[case] line: &str) {
        assert!(verdict(line).is_ok(), "{line}");
    }

    #[test]
    fn comment_markers_are_not_understood() {
        assert!(!verdict("-- DELETE FROM users").is_ok());
    }

    #[test]
    fn where_is_matched_as_a_substring() {
        // known blind spot: a table named `nowhere` counts as a WHERE clause
        assert!(verdict("DELETE FROM nowhere").is_ok());
    }

    #[test]
    fn custom_prefix_changes_what_is_temporary() {
        let policy = Policy::new("scratch_").expect("valid prefix");
        let line = "DROP TABLE scratch_orders";
        assert!(policy.evaluate(&tokenize(line), 3, line).is_ok());
        let line = "DROP TABLE tmp_orders";
        let v = policy
            .evaluate(&tokenize(line), 3, line)
            .into_violation()
            .expect("violation");
        assert_eq!(v.line_number, 3);
    }

    #[test]
    fn free_evaluate_uses_default_policy() {
        let line = "TRUNCATE tmp_logs";
        assert!(evaluate(&tokenize(line), 1, line).is_ok());
        let line = "TRUNCATE logs";
        assert!(!evaluate(&tokenize(line), 1, line).is_ok());
    }
}
