//! Classification tests driven through the parser, so decorator and
//! assignment shapes come from real Python source.

use method_order::features::classification::{classify_members, DefaultClassifier};
use method_order::features::parsing::parse_classes;
use method_order::Category;
use pretty_assertions::assert_eq;

/// Parse a module, classify the first class's members, return (name, category).
fn classified(code: &str) -> Vec<(String, Category)> {
    let classes = parse_classes("test.py", code).expect("fixture must parse");
    let class = classes.into_iter().next().expect("fixture has a class");
    classify_members(&DefaultClassifier, &class.members)
        .into_iter()
        .map(|m| (m.name, m.category))
        .collect()
}

#[test]
fn sql_constraints_wins_over_private_attribute_rule() {
    let members = classified(
        r#"
class Foo(models.Model):
    _sql_constraints = [("name_unique", "UNIQUE(name)", "dup")]
    _name = "foo.model"
"#,
    );
    assert_eq!(
        members,
        vec![
            ("_sql_constraints".to_string(), Category::SqlConstraints),
            ("_name".to_string(), Category::PrivateAttributes),
        ]
    );
}

#[test]
fn field_factory_calls_are_field_declarations() {
    let members = classified(
        r#"
class Foo(models.Model):
    name = fields.Char(string="Name")
    total = fields.Float(compute="_compute_total")
"#,
    );
    assert!(members
        .iter()
        .all(|(_, cat)| *cat == Category::FieldDeclarations));
}

#[test]
fn aliased_or_indirect_factories_fall_through() {
    // only one attribute level rooted at `fields` is recognized
    let members = classified(
        r#"
class Foo(models.Model):
    a = f.Char()
    b = odoo.fields.Char()
    c = make_field()
    d = 42
"#,
    );
    assert!(members
        .iter()
        .all(|(_, cat)| *cat == Category::OtherMethods));
}

#[test]
fn constrains_decorator_current_spelling() {
    let members = classified(
        r#"
class Foo(models.Model):
    @api.constrains("name")
    def _check_name(self):
        pass
"#,
    );
    assert_eq!(members[0].1, Category::ConstraintsMethods);
}

#[test]
fn constraints_decorator_legacy_spelling() {
    let members = classified(
        r#"
class Foo(models.Model):
    @api.constraints("name")
    def _check_name(self):
        pass
"#,
    );
    assert_eq!(members[0].1, Category::ConstraintsMethods);
}

#[test]
fn bare_and_uninvoked_decorators_resolve_too() {
    let members = classified(
        r#"
class Foo(models.Model):
    @constrains
    def _check_a(self):
        pass

    @api.constrains
    def _check_b(self):
        pass
"#,
    );
    assert_eq!(members[0].1, Category::ConstraintsMethods);
    assert_eq!(members[1].1, Category::ConstraintsMethods);
}

#[test]
fn onchange_by_decorator_or_by_name() {
    let members = classified(
        r#"
class Foo(models.Model):
    @api.onchange("value")
    def reset_value(self):
        pass

    def _onchange_value(self):
        pass
"#,
    );
    assert_eq!(members[0].1, Category::OnchangeMethods);
    assert_eq!(members[1].1, Category::OnchangeMethods);
}

#[test]
fn unrelated_decorators_do_not_classify() {
    let members = classified(
        r#"
class Foo(models.Model):
    @api.model
    @api.depends("value")
    def helper(self):
        pass
"#,
    );
    assert_eq!(members[0].1, Category::OtherMethods);
}

#[test]
fn method_name_rules() {
    let members = classified(
        r#"
class Foo(models.Model):
    def default_get(self, fields_list):
        pass

    def _default_name(self):
        pass

    def _domain_partner(self):
        pass

    def _selection_state(self):
        pass

    def _compute_total(self):
        pass

    def _inverse_total(self):
        pass

    def _search_total(self, operator, value):
        pass

    def create(self, vals):
        pass

    def toggle_active(self):
        pass

    def action_confirm(self):
        pass

    def anything_else(self):
        pass
"#,
    );
    let categories: Vec<Category> = members.into_iter().map(|(_, c)| c).collect();
    assert_eq!(
        categories,
        vec![
            Category::DefaultMethods,
            Category::DefaultMethods,
            Category::SelectionComputedMethods,
            Category::SelectionComputedMethods,
            Category::ComputeInverseSearch,
            Category::ComputeInverseSearch,
            Category::ComputeInverseSearch,
            Category::CrudMethods,
            Category::CrudMethods,
            Category::ActionMethods,
            Category::OtherMethods,
        ]
    );
}

#[test]
fn classification_is_a_total_function() {
    // every member gets exactly one category, whatever the shape
    let members = classified(
        r#"
class Foo(models.Model):
    x, y = 1, 2
    a = b = fields.Char()
    async def refresh(self):
        pass
"#,
    );
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].1, Category::OtherMethods);
    assert_eq!(members[1].1, Category::FieldDeclarations);
    assert_eq!(members[2].1, Category::OtherMethods);
}
