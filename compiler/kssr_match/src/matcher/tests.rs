use kssr_ir::{NodeId, PropertyDecl, SharedInterner, SyntaxTree, TokenTag};
use pretty_assertions::assert_eq;

use crate::{
    BindingStore, MatchOptions, Matcher, Param, PatternVariables, SignatureTable,
    SubstitutionStore,
};

struct Fixture {
    pattern: SyntaxTree,
    code: SyntaxTree,
    table: SignatureTable,
}

fn fixture() -> Fixture {
    let interner = SharedInterner::new();
    let mut table = SignatureTable::with_builtins(interner.clone());
    table.declare_function("foo", &[Param::Required("x"), Param::Required("y")]);
    table.declare_function("sum", &[Param::Vararg("values")]);
    let int = table.type_named("Int");
    table
        .declare_function("listOf", &[Param::Vararg("elements")])
        .type_argument(int);
    table.declare_function("dup", &[Param::Required("a")]);
    table.declare_function("dup", &[Param::Defaulted("a")]);
    Fixture {
        pattern: SyntaxTree::new(interner.clone()),
        code: SyntaxTree::new(interner),
        table,
    }
}

impl Fixture {
    /// Bindings of a successful match, `None` on mismatch.
    fn run_with(&self, options: MatchOptions, p: NodeId, c: NodeId) -> Option<Vec<(String, String)>> {
        let vars = PatternVariables::scan(&self.pattern, p);
        let mut store = SubstitutionStore::new(&vars);
        let matched = Matcher::new(&self.pattern, &self.code, &self.table)
            .with_options(options)
            .is_match(p, c, &mut store);
        matched.then(|| store.resolved())
    }

    fn run(&self, p: NodeId, c: NodeId) -> Option<Vec<(String, String)>> {
        self.run_with(MatchOptions::default(), p, c)
    }

    fn matches(&self, p: NodeId, c: NodeId) -> bool {
        self.run(p, c).is_some()
    }
}

fn bound(pairs: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
    Some(
        pairs
            .iter()
            .map(|(name, text)| ((*name).to_owned(), (*text).to_owned()))
            .collect(),
    )
}

// Expressions

#[test]
fn identical_expressions_match() {
    let mut f = fixture();
    let a = f.pattern.name_ref("a");
    let one = f.pattern.constant("1");
    let p = f.pattern.binary(TokenTag::Plus, a, one);
    let a = f.code.name_ref("a");
    let one = f.code.constant("1");
    let c = f.code.binary(TokenTag::Plus, a, one);
    let a = f.code.name_ref("a");
    let one = f.code.constant("1");
    let minus = f.code.binary(TokenTag::Minus, a, one);

    assert!(f.matches(p, c));
    assert!(!f.matches(p, minus));
}

#[test]
fn repeated_variable_must_bind_the_same_text() {
    let mut f = fixture();
    let a1 = f.pattern.name_ref("$a$");
    let a2 = f.pattern.name_ref("$a$");
    let p = f.pattern.binary(TokenTag::Plus, a1, a2);
    let x1 = f.code.name_ref("x");
    let x2 = f.code.name_ref("x");
    let same = f.code.binary(TokenTag::Plus, x1, x2);
    let x = f.code.name_ref("x");
    let y = f.code.name_ref("y");
    let different = f.code.binary(TokenTag::Plus, x, y);

    assert_eq!(f.run(p, same), bound(&[("a", "x")]));
    assert_eq!(f.run(p, different), None);
}

#[test]
fn failed_match_leaves_no_bindings() {
    let mut f = fixture();
    let a = f.pattern.name_ref("$a$");
    let one = f.pattern.constant("1");
    let p = f.pattern.binary(TokenTag::Plus, a, one);
    let x = f.code.name_ref("x");
    let two = f.code.constant("2");
    let c = f.code.binary(TokenTag::Plus, x, two);

    let vars = PatternVariables::scan(&f.pattern, p);
    let mut store = SubstitutionStore::new(&vars);
    let matcher = Matcher::new(&f.pattern, &f.code, &f.table);
    assert!(!matcher.is_match(p, c, &mut store));
    assert!(store.bindings().is_empty());
    assert_eq!(store.snapshot().mark(), 0);
}

#[test]
fn constants_compare_exact_text() {
    let mut f = fixture();
    let p = f.pattern.constant("0x10");
    let same = f.code.constant("0x10");
    let decimal = f.code.constant("16");

    assert!(f.matches(p, same));
    assert!(!f.matches(p, decimal));
}

#[test]
fn case_insensitive_names() {
    let mut f = fixture();
    let p = f.pattern.name_ref("Foo");
    let c = f.code.name_ref("foo");

    assert!(!f.matches(p, c));
    let options = MatchOptions::default().with_case_sensitive(false);
    assert!(f.run_with(options, p, c).is_some());
}

#[test]
fn missing_else_in_pattern_is_a_wildcard() {
    let mut f = fixture();
    let cond = f.pattern.name_ref("$c$");
    let then_branch = f.pattern.name_ref("b");
    let p = f.pattern.if_expr(cond, then_branch, None);
    let cond = f.code.name_ref("a");
    let then_branch = f.code.name_ref("b");
    let else_branch = f.code.name_ref("e");
    let c = f.code.if_expr(cond, then_branch, Some(else_branch));

    assert_eq!(f.run(p, c), bound(&[("c", "a")]));
}

#[test]
fn lambda_parameters_bind_through_the_body() {
    let mut f = fixture();
    let param = f.pattern.param("$x$", None, None);
    let x = f.pattern.name_ref("$x$");
    let two = f.pattern.constant("2");
    let times = f.pattern.binary(TokenTag::Mul, x, two);
    let p = f.pattern.lambda(&[param], &[times]);

    let param = f.code.param("y", None, None);
    let y = f.code.name_ref("y");
    let two = f.code.constant("2");
    let times = f.code.binary(TokenTag::Mul, y, two);
    let c = f.code.lambda(&[param], &[times]);

    let param = f.code.param("y", None, None);
    let z = f.code.name_ref("z");
    let two = f.code.constant("2");
    let times = f.code.binary(TokenTag::Mul, z, two);
    let other = f.code.lambda(&[param], &[times]);

    assert_eq!(f.run(p, c), bound(&[("x", "y")]));
    assert_eq!(f.run(p, other), None);
}

#[test]
fn labels_match_by_kind_and_name() {
    let mut f = fixture();
    let p = f.pattern.break_expr(Some("$l$"));
    let brk = f.code.break_expr(Some("outer"));
    let cont = f.code.continue_expr(Some("outer"));
    let unlabeled = f.code.break_expr(None);

    assert_eq!(f.run(p, brk), bound(&[("l", "outer")]));
    assert_eq!(f.run(p, cont), None);
    assert_eq!(f.run(p, unlabeled), None);
}

#[test]
fn return_values_are_compared() {
    let mut f = fixture();
    let one = f.pattern.constant("1");
    let p = f.pattern.return_expr(Some("forEach"), Some(one));
    let one = f.code.constant("1");
    let same = f.code.return_expr(Some("forEach"), Some(one));
    let two = f.code.constant("2");
    let other = f.code.return_expr(Some("forEach"), Some(two));

    assert!(f.matches(p, same));
    assert!(!f.matches(p, other));
}

#[test]
fn template_entries_bind_text_and_names() {
    let mut f = fixture();
    let greeting = f.pattern.literal_entry("$greeting$");
    let who = f.pattern.name_entry("$who$");
    let p = f.pattern.template(&[greeting, who]);
    let hi = f.code.literal_entry("hi ");
    let name = f.code.name_entry("name");
    let c = f.code.template(&[hi, name]);

    assert_eq!(f.run(p, c), bound(&[("greeting", "hi "), ("who", "name")]));
}

#[test]
fn array_access_compares_receiver_then_indices_in_order() {
    let mut f = fixture();
    let a = f.pattern.name_ref("a");
    let i = f.pattern.name_ref("$i$");
    let one = f.pattern.constant("1");
    let p = f.pattern.array_access(a, &[i, one]);
    let a = f.pattern.name_ref("a");
    let one = f.pattern.constant("1");
    let x = f.pattern.name_ref("x");
    let p_swapped = f.pattern.array_access(a, &[one, x]);

    let a = f.code.name_ref("a");
    let x = f.code.name_ref("x");
    let one = f.code.constant("1");
    let c = f.code.array_access(a, &[x, one]);
    let b = f.code.name_ref("b");
    let other_receiver = f.code.array_access(b, &[x, one]);

    assert_eq!(f.run(p, c), bound(&[("i", "x")]));
    assert!(!f.matches(p_swapped, c));
    assert!(!f.matches(p, other_receiver));
}

#[test]
fn dot_qualified_compares_receiver_and_selector() {
    let mut f = fixture();
    let r = f.pattern.name_ref("$r$");
    let size = f.pattern.name_ref("size");
    let p = f.pattern.dot(r, size);

    let list = f.code.name_ref("list");
    let size = f.code.name_ref("size");
    let c = f.code.dot(list, size);
    let length = f.code.name_ref("length");
    let other = f.code.dot(list, length);

    assert_eq!(f.run(p, c), bound(&[("r", "list")]));
    assert!(!f.matches(p, other));
}

#[test]
fn postfix_operator_must_agree() {
    let mut f = fixture();
    let i = f.pattern.name_ref("$i$");
    let p = f.pattern.postfix(i, TokenTag::PlusPlus);

    let n = f.code.name_ref("n");
    let inc = f.code.postfix(n, TokenTag::PlusPlus);
    let dec = f.code.postfix(n, TokenTag::MinusMinus);
    let pre = f.code.prefix(TokenTag::PlusPlus, n);

    assert_eq!(f.run(p, inc), bound(&[("i", "n")]));
    assert!(!f.matches(p, dec));
    assert!(!f.matches(p, pre));
}

#[test]
fn super_compares_its_type_qualifier() {
    let mut f = fixture();
    let base = f.pattern.type_ref("Base");
    let p = f.pattern.super_expr(None, Some(base));
    let p_plain = f.pattern.super_expr(None, None);

    let base = f.code.type_ref("Base");
    let c = f.code.super_expr(None, Some(base));
    let other = f.code.type_ref("Other");
    let c_other = f.code.super_expr(None, Some(other));

    assert!(f.matches(p, c));
    assert!(!f.matches(p, c_other));
    assert!(!f.matches(p_plain, c));
}

#[test]
fn escape_entries_compare_text() {
    let mut f = fixture();
    let newline = f.pattern.escape_entry("\\n");
    let p = f.pattern.template(&[newline]);

    let newline = f.code.escape_entry("\\n");
    let c = f.code.template(&[newline]);
    let tab = f.code.escape_entry("\\t");
    let c_tab = f.code.template(&[tab]);
    let literal = f.code.literal_entry("\\n");
    let c_literal = f.code.template(&[literal]);

    assert!(f.matches(p, c));
    assert!(!f.matches(p, c_tab));
    assert!(!f.matches(p, c_literal));
}

#[test]
fn block_entries_compare_their_expressions() {
    let mut f = fixture();
    let e = f.pattern.name_ref("$e$");
    let entry = f.pattern.block_entry(e);
    let p = f.pattern.template(&[entry]);

    let a = f.code.name_ref("a");
    let b = f.code.name_ref("b");
    let sum = f.code.binary(TokenTag::Plus, a, b);
    let entry = f.code.block_entry(sum);
    let c = f.code.template(&[entry]);
    let entry = f.code.name_entry("a");
    let c_name = f.code.template(&[entry]);

    assert_eq!(f.run(p, c), bound(&[("e", "a + b")]));
    assert!(!f.matches(p, c_name));
}

#[test]
fn leaves_compare_token_tags_not_text() {
    let mut f = fixture();
    let p = f.pattern.leaf(TokenTag::KwClass);

    let c = f.code.token(TokenTag::KwClass, "CLASS");
    let other = f.code.leaf(TokenTag::KwInterface);
    let constant = f.code.constant("class");

    assert!(f.matches(p, c));
    assert!(!f.matches(p, other));
    assert!(!f.matches(p, constant));
}

// Calls

#[test]
fn named_arguments_match_in_any_written_order() {
    let mut f = fixture();
    let b = f.pattern.name_ref("$b$");
    let a = f.pattern.name_ref("$a$");
    let y = f.pattern.named_arg("y", b);
    let x = f.pattern.named_arg("x", a);
    let p = f.pattern.call("foo", &[y, x]);

    let one = f.code.constant("1");
    let two = f.code.constant("2");
    let x = f.code.named_arg("x", one);
    let y = f.code.named_arg("y", two);
    let c = f.code.call("foo", &[x, y]);

    assert_eq!(f.run(p, c), bound(&[("b", "2"), ("a", "1")]));
}

#[test]
fn positional_pattern_does_not_match_named_code() {
    let mut f = fixture();
    let a = f.pattern.name_ref("$a$");
    let b = f.pattern.name_ref("$b$");
    let args = [f.pattern.arg(a), f.pattern.arg(b)];
    let p = f.pattern.call("foo", &args);

    let one = f.code.constant("1");
    let two = f.code.constant("2");
    let y = f.code.named_arg("y", one);
    let x = f.code.named_arg("x", two);
    let c = f.code.call("foo", &[y, x]);

    assert!(!f.matches(p, c));
}

#[test]
fn plain_pattern_arguments_match_code_spread() {
    let mut f = fixture();
    let a = f.pattern.name_ref("$a$");
    let b = f.pattern.name_ref("$b$");
    let args = [f.pattern.arg(a), f.pattern.arg(b)];
    let p = f.pattern.call("sum", &args);

    let one = f.code.constant("1");
    let two = f.code.constant("2");
    let inner = [f.code.arg(one), f.code.arg(two)];
    let array = f.code.call("intArrayOf", &inner);
    let spread = f.code.spread_arg(array);
    let c = f.code.call("sum", &[spread]);

    assert_eq!(f.run(p, c), bound(&[("a", "1"), ("b", "2")]));
}

#[test]
fn pattern_spread_matches_plain_code_arguments() {
    let mut f = fixture();
    let a = f.pattern.name_ref("$a$");
    let b = f.pattern.name_ref("$b$");
    let inner = [f.pattern.arg(a), f.pattern.arg(b)];
    let array = f.pattern.call("intArrayOf", &inner);
    let spread = f.pattern.spread_arg(array);
    let p = f.pattern.call("sum", &[spread]);

    let one = f.code.constant("1");
    let two = f.code.constant("2");
    let args = [f.code.arg(one), f.code.arg(two)];
    let c = f.code.call("sum", &args);
    let three = f.code.constant("3");
    let longer_args = [f.code.arg(one), f.code.arg(two), f.code.arg(three)];
    let longer = f.code.call("sum", &longer_args);
    let shorter_args = [f.code.arg(one)];
    let shorter = f.code.call("sum", &shorter_args);

    assert_eq!(f.run(p, c), bound(&[("a", "1"), ("b", "2")]));
    assert_eq!(f.run(p, longer), bound(&[("a", "1"), ("b", "2")]));
    assert_eq!(f.run(p, shorter), None);
}

#[test]
fn pattern_arguments_drive_the_walk() {
    let mut f = fixture();
    let a = f.pattern.name_ref("$a$");
    let arg = f.pattern.arg(a);
    let p = f.pattern.call("sum", &[arg]);
    let one = f.pattern.constant("1");
    let two = f.pattern.constant("2");
    let three = f.pattern.constant("3");
    let three_args = [f.pattern.arg(one), f.pattern.arg(two), f.pattern.arg(three)];
    let p_three = f.pattern.call("sum", &three_args);

    let one = f.code.constant("1");
    let two = f.code.constant("2");
    let args = [f.code.arg(one), f.code.arg(two)];
    let c = f.code.call("sum", &args);

    assert_eq!(f.run(p, c), bound(&[("a", "1")]));
    assert_eq!(f.run(p_three, c), None);
}

#[test]
fn named_pattern_prefix_leaves_other_code_arguments_alone() {
    let mut f = fixture();
    let b = f.pattern.name_ref("$b$");
    let x = f.pattern.named_arg("x", b);
    let p = f.pattern.call("foo", &[x]);

    let one = f.code.constant("1");
    let two = f.code.constant("2");
    let y = f.code.named_arg("y", two);
    let x = f.code.named_arg("x", one);
    let c = f.code.call("foo", &[y, x]);

    assert_eq!(f.run(p, c), bound(&[("b", "1")]));
}

#[test]
fn repeated_argument_variable() {
    let mut f = fixture();
    let a1 = f.pattern.name_ref("$a$");
    let a2 = f.pattern.name_ref("$a$");
    let args = [f.pattern.arg(a1), f.pattern.arg(a2)];
    let p = f.pattern.call("foo", &args);

    let one = f.code.constant("1");
    let same_args = [f.code.arg(one), f.code.arg(one)];
    let same = f.code.call("foo", &same_args);
    let two = f.code.constant("2");
    let other_args = [f.code.arg(one), f.code.arg(two)];
    let other = f.code.call("foo", &other_args);

    assert!(f.matches(p, same));
    assert!(!f.matches(p, other));
}

#[test]
fn unresolved_or_ambiguous_calls_never_match() {
    let mut f = fixture();
    let p_unknown = f.pattern.call("baz", &[]);
    let c_unknown = f.code.call("baz", &[]);
    let one = f.pattern.constant("1");
    let p_arg = f.pattern.arg(one);
    let p_dup = f.pattern.call("dup", &[p_arg]);
    let one = f.code.constant("1");
    let c_arg = f.code.arg(one);
    let c_dup = f.code.call("dup", &[c_arg]);

    assert!(!f.matches(p_unknown, c_unknown));
    assert!(!f.matches(p_dup, c_dup));
}

#[test]
fn explicit_type_arguments_by_short_or_qualified_name() {
    let mut f = fixture();
    let one = f.code.constant("1");
    let arg = f.code.arg(one);
    let c = f.code.call("listOf", &[arg]);

    let mut pattern_for = |ty: &str| {
        let ty = f.pattern.type_ref(ty);
        let a = f.pattern.name_ref("$a$");
        let arg = f.pattern.arg(a);
        let callee = f.pattern.name_ref("listOf");
        f.pattern.call_with(callee, &[ty], &[arg])
    };
    let short = pattern_for("Int");
    let qualified = pattern_for("kotlin.Int");
    let wrong = pattern_for("String");

    assert!(f.matches(short, c));
    assert!(f.matches(qualified, c));
    assert!(!f.matches(wrong, c));
}

#[test]
fn missing_type_arguments_only_match_calls_without_any() {
    let mut f = fixture();
    let x = f.pattern.name_ref("$x$");
    let arg = f.pattern.arg(x);
    let p_list = f.pattern.call("listOf", &[arg]);
    let x = f.pattern.name_ref("$x$");
    let arg = f.pattern.arg(x);
    let p_sum = f.pattern.call("sum", &[arg]);

    let one = f.code.constant("1");
    let arg = f.code.arg(one);
    let c_list = f.code.call("listOf", &[arg]);
    let arg = f.code.arg(one);
    let c_sum = f.code.call("sum", &[arg]);

    assert_eq!(f.run(p_list, c_list), None);
    assert_eq!(f.run(p_sum, c_sum), bound(&[("x", "1")]));
}

// Declarations

#[test]
fn property_type_by_short_or_qualified_name() {
    let mut f = fixture();
    let int = f.pattern.type_ref("Int");
    let v = f.pattern.name_ref("$v$");
    let p = f.pattern.property(PropertyDecl {
        name: "$n$",
        type_ref: Some(int),
        value: Some(v),
        ..PropertyDecl::default()
    });

    let qualified = f.code.type_ref("kotlin.Int");
    let five = f.code.constant("5");
    let c_qualified = f.code.property(PropertyDecl {
        name: "x",
        type_ref: Some(qualified),
        value: Some(five),
        ..PropertyDecl::default()
    });
    let short = f.code.type_ref("Int");
    let c_short = f.code.property(PropertyDecl {
        name: "x",
        type_ref: Some(short),
        value: Some(five),
        ..PropertyDecl::default()
    });
    let c_inferred = f.code.property(PropertyDecl {
        name: "x",
        value: Some(five),
        ..PropertyDecl::default()
    });
    let text = f.code.constant("\"five\"");
    let c_string = f.code.property(PropertyDecl {
        name: "x",
        value: Some(text),
        ..PropertyDecl::default()
    });
    let c_var = f.code.property(PropertyDecl {
        name: "x",
        mutable: true,
        type_ref: Some(short),
        value: Some(five),
        ..PropertyDecl::default()
    });

    assert_eq!(f.run(p, c_qualified), bound(&[("n", "x"), ("v", "5")]));
    assert_eq!(f.run(p, c_short), bound(&[("n", "x"), ("v", "5")]));
    assert!(f.matches(p, c_inferred));
    assert!(!f.matches(p, c_string));
    assert!(!f.matches(p, c_var));
}

#[test]
fn untyped_pattern_property_accepts_any_type() {
    let mut f = fixture();
    let p = f.pattern.property(PropertyDecl {
        name: "$n$",
        ..PropertyDecl::default()
    });
    let ty = f.code.type_ref("String");
    let value = f.code.constant("\"s\"");
    let c = f.code.property(PropertyDecl {
        name: "label",
        type_ref: Some(ty),
        value: Some(value),
        ..PropertyDecl::default()
    });

    assert_eq!(f.run(p, c), bound(&[("n", "label")]));
}

#[test]
fn typed_pattern_needs_a_resolvable_code_type() {
    let mut f = fixture();
    let ty = f.pattern.type_ref("Int");
    let p = f.pattern.property(PropertyDecl {
        name: "x",
        type_ref: Some(ty),
        ..PropertyDecl::default()
    });
    let other = f.code.name_ref("other");
    let c = f.code.property(PropertyDecl {
        name: "x",
        value: Some(other),
        ..PropertyDecl::default()
    });

    assert!(!f.matches(p, c));
}

#[test]
fn loose_matching_ignores_missing_modifiers() {
    let mut f = fixture();
    let one = f.pattern.constant("1");
    let p = f.pattern.property(PropertyDecl {
        name: "x",
        value: Some(one),
        ..PropertyDecl::default()
    });
    let mods = f.code.modifiers(&[TokenTag::Private]);
    let one = f.code.constant("1");
    let c = f.code.property(PropertyDecl {
        name: "x",
        value: Some(one),
        modifiers: Some(mods),
        ..PropertyDecl::default()
    });

    assert!(!f.matches(p, c));
    let loose = MatchOptions::default().with_loose_matching(true);
    assert!(f.run_with(loose, p, c).is_some());
}

#[test]
fn constructor_parameters_match_in_any_order() {
    let mut f = fixture();
    let int = f.pattern.type_ref("Int");
    let string = f.pattern.type_ref("String");
    let a = f.pattern.param("a", Some(int), None);
    let b = f.pattern.param("b", Some(string), None);
    let params = f.pattern.param_list(&[a, b]);
    let ctor = f.pattern.primary_constructor(None, Some(params));
    let p = f.pattern.class_decl(TokenTag::KwClass, "$C$", Some(ctor), None);

    let int = f.code.type_ref("Int");
    let string = f.code.type_ref("String");
    let a = f.code.param("a", Some(int), None);
    let b = f.code.param("b", Some(string), None);
    let params = f.code.param_list(&[b, a]);
    let ctor = f.code.primary_constructor(None, Some(params));
    let c = f.code.class_decl(TokenTag::KwClass, "Foo", Some(ctor), None);
    let iface = f.code.class_decl(TokenTag::KwInterface, "Foo", Some(ctor), None);

    assert_eq!(f.run(p, c), bound(&[("C", "Foo")]));
    assert_eq!(f.run(p, iface), None);
}

#[test]
fn any_order_backtracks_and_rolls_back_bindings() {
    let mut f = fixture();
    let t = f.pattern.type_ref("$T$");
    let first = f.pattern.param("$n$", Some(t), None);
    let int = f.pattern.type_ref("Int");
    let second = f.pattern.param("x", Some(int), None);
    let p = f.pattern.param_list(&[first, second]);

    let int = f.code.type_ref("Int");
    let x = f.code.param("x", Some(int), None);
    let string = f.code.type_ref("String");
    let y = f.code.param("y", Some(string), None);
    let c = f.code.param_list(&[x, y]);

    assert_eq!(f.run(p, c), bound(&[("n", "y"), ("T", "String")]));
}

#[test]
fn class_members_match_in_any_order() {
    let mut f = fixture();
    let member = |tree: &mut SyntaxTree, name: &str, value: &str| {
        let value = tree.constant(value);
        tree.property(PropertyDecl {
            name,
            value: Some(value),
            ..PropertyDecl::default()
        })
    };
    let pa = member(&mut f.pattern, "a", "1");
    let pb = member(&mut f.pattern, "b", "2");
    let p = f.pattern.class_decl(TokenTag::KwClass, "Box", None, Some(&[pa, pb]));
    let cb = member(&mut f.code, "b", "2");
    let ca = member(&mut f.code, "a", "1");
    let c = f.code.class_decl(TokenTag::KwClass, "Box", None, Some(&[cb, ca]));
    let extra = member(&mut f.code, "z", "0");
    let bigger = f.code.class_decl(TokenTag::KwClass, "Box", None, Some(&[cb, ca, extra]));

    assert!(f.matches(p, c));
    assert!(!f.matches(p, bigger));
}

#[test]
fn class_pattern_does_not_match_interface() {
    let mut f = fixture();
    let p = f.pattern.class_decl(TokenTag::KwClass, "$C$", None, None);
    let p_iface = f.pattern.class_decl(TokenTag::KwInterface, "$C$", None, None);

    let c = f.code.class_decl(TokenTag::KwClass, "Foo", None, None);
    let iface = f.code.class_decl(TokenTag::KwInterface, "Foo", None, None);

    assert_eq!(f.run(p, c), bound(&[("C", "Foo")]));
    assert_eq!(f.run(p_iface, iface), bound(&[("C", "Foo")]));
    assert_eq!(f.run(p, iface), None);
    assert_eq!(f.run(p_iface, c), None);
}

#[test]
fn type_parameters_match_in_any_order() {
    let mut f = fixture();
    let t = f.pattern.type_param("T");
    let u = f.pattern.type_param("U");
    let p = f.pattern.type_param_list(&[t, u]);

    let u = f.code.type_param("U");
    let t = f.code.type_param("T");
    let c = f.code.type_param_list(&[u, t]);
    let v = f.code.type_param("V");
    let c_other = f.code.type_param_list(&[t, v]);
    let c_longer = f.code.type_param_list(&[t, u, v]);

    assert!(f.matches(p, c));
    assert!(!f.matches(p, c_other));
    assert!(!f.matches(p, c_longer));
}
