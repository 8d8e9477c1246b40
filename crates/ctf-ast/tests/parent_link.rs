use ctf_ast::builder::*;
use ctf_ast::link_parents;
use ctf_ast::unary::UnaryLink;

#[test]
fn parent_links_reach_every_node_in_a_realistic_tree() {
    let left = unary_string(UnaryLink::Unknown, "name");
    let right = unary_string(UnaryLink::Unknown, "my_trace");
    let expr = ctf_expression(vec![left.clone()], vec![right.clone()]);
    let tr = trace(vec![expr.clone()]);
    let tree = root(vec![], vec![], vec![], vec![tr.clone()], vec![], vec![]);

    link_parents(&tree);

    assert!(tree.parent().is_none());
    assert_eq!(tr.parent().unwrap().id, tree.id);
    assert_eq!(expr.parent().unwrap().id, tr.id);
    assert_eq!(left.parent().unwrap().id, expr.id);
    assert_eq!(right.parent().unwrap().id, expr.id);
}

#[test]
fn relinking_after_mutation_follows_the_new_shape() {
    let value = unary_signed(UnaryLink::Unknown, 3);
    let enumerator_node = enumerator(vec![value.clone()]);
    let enum_node = r#enum(None, vec![enumerator_node.clone()]);
    let tree = root(vec![], vec![], vec![], vec![], vec![], vec![]);

    // Link once while `enum_node` is detached from `tree` -- its parent
    // should come back empty.
    link_parents(&enum_node);
    assert!(enum_node.parent().is_none());
    assert_eq!(enumerator_node.parent().unwrap().id, enum_node.id);

    // `tree` itself has no children yet; relinking it must not disturb the
    // unrelated `enum_node` subtree linked a moment ago.
    link_parents(&tree);
    assert_eq!(enumerator_node.parent().unwrap().id, enum_node.id);
    assert!(value.parent().is_some());
}

#[test]
fn unrecognized_kind_has_no_children_to_link() {
    let weird = unknown_kind(0xbeef);
    link_parents(&weird);
    assert!(weird.parent().is_none());
    assert!(weird.children().is_empty());
}
