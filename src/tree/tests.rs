use super::*;
use crate::{
    traversal::{algorithms::CollectLeaves, Traversable, TraverseIter, VisitorDirection},
    IndexPath,
};
use alloc::{string::{String, ToString}, vec};

fn three_leaves() -> Tree<i32> {
    Tree::branch(-1, vec![Tree::leaf(1), Tree::leaf(2), Tree::leaf(3)])
}

fn nested() -> Tree<i32> {
    Tree::branch(-1, vec![
        Tree::leaf(1),
        Tree::branch(-1, vec![
            Tree::leaf(2),
            Tree::leaf(3),
            Tree::leaf(4),
        ]),
        Tree::leaf(5),
        Tree::branch(-1, vec![
            Tree::leaf(6),
            Tree::branch(-1, vec![
                Tree::leaf(7),
                Tree::leaf(8),
            ]),
        ]),
    ])
}

#[test]
fn leaves_of_leaf() {
    assert_eq!(Tree::leaf(1).leaves(), [1]);
}

#[test]
fn leaves_of_single_child() {
    assert_eq!(Tree::branch(0, vec![Tree::leaf(1)]).leaves(), [1]);
}

#[test]
fn leaves_of_multiple_depths() {
    assert_eq!(nested().leaves(), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(
        nested().iter_leaves().copied().collect::<Vec<_>>(),
        nested().leaves(),
    );
}

#[test]
fn empty_branch_has_no_leaves() {
    let tree = Tree::branch(0, vec![Tree::leaf(1), Tree::branch(2, vec![]), Tree::leaf(3)]);
    assert_eq!(tree.leaves(), [1, 3]);
    assert_eq!(Tree::<i32>::branch(0, vec![]).leaves(), Vec::<i32>::new());
}

#[test]
fn from_leaves_builds_branch() {
    let tree = Tree::from_leaves(0, vec![1, 2, 3, 4, 5]);
    assert!(tree.is_branch());
    assert_eq!(tree.value(), &0);
    assert_eq!(tree.leaves(), [1, 2, 3, 4, 5]);
}

#[test]
fn value_of_both_variants() {
    assert_eq!(Tree::leaf(7).value(), &7);
    assert_eq!(three_leaves().value(), &-1);
    assert_eq!(three_leaves().node_value(), NodeValue::Branch(&-1));
    assert_eq!(Tree::leaf(7).node_value(), NodeValue::Leaf(&7));
    assert_eq!(three_leaves().into_value(), -1);
}

#[test]
fn updating_keeps_shape() {
    let tree = three_leaves();
    let updated = tree.updating(10);
    assert_eq!(updated.value(), &10);
    assert_eq!(updated.children(), tree.children());
    assert_eq!(Tree::leaf(1).updating(2), Tree::leaf(2));
    if let (Tree::Branch(_, old), Tree::Branch(_, new)) = (&tree, &updated) {
        assert!(Shared::ptr_eq(old, new));
    } else {
        panic!("updating changed the variant");
    }
}

#[test]
fn map_preserves_structure() {
    let mapped = nested().map(|x| x * 10);
    assert_eq!(mapped.leaves(), [10, 20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(mapped.value(), &-10);
    assert_eq!(mapped.node_count(), nested().node_count());
    assert_eq!(mapped.depth(), nested().depth());

    let mut visited = Vec::new();
    let _ = three_leaves().map(|x| visited.push(*x));
    assert_eq!(visited, [-1, 1, 2, 3]);
}

#[test]
fn equality() {
    assert_eq!(Tree::leaf(1), Tree::leaf(1));
    assert_ne!(Tree::leaf(1), Tree::leaf(2));
    assert_ne!(Tree::leaf(1), Tree::branch(1, vec![]));
    assert_eq!(three_leaves(), three_leaves());
    assert_ne!(three_leaves(), three_leaves().updating(0));
    assert_ne!(
        three_leaves(),
        Tree::branch(-1, vec![Tree::leaf(1), Tree::leaf(2)]),
    );
}

#[test]
fn counting() {
    assert_eq!(Tree::leaf(0).node_count(), 1);
    assert_eq!(Tree::leaf(0).depth(), 0);
    assert_eq!(nested().node_count(), 12);
    assert_eq!(nested().depth(), 3);
}

#[test]
fn child_access() {
    let tree = three_leaves();
    assert_eq!(tree.child(2), Ok(&Tree::leaf(3)));
    assert_eq!(tree.child(3), Err(TreeError::IndexOutOfBounds));
    assert_eq!(
        Tree::leaf(0).child(0),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
}

#[test]
fn subtree_by_path() {
    let tree = nested();
    assert_eq!(tree.subtree(&[3, 1, 0]), Ok(&Tree::leaf(7)));
    assert_eq!(tree.subtree(&[1]).map(Tree::leaves), Ok(vec![2, 3, 4]));
    assert_eq!(tree.subtree(&[4]), Err(TreeError::IllFormedIndexPath));
    assert_eq!(tree.subtree(&[0, 0]), Err(TreeError::IllFormedIndexPath));
}

#[test]
fn replace_at_index() {
    let replaced = three_leaves().replacing_tree_at(1, Tree::leaf(0)).expect("index 1 exists");
    assert_eq!(replaced.leaves(), [1, 0, 3]);
    assert_eq!(
        three_leaves().replacing_tree_at(3, Tree::leaf(0)),
        Err(TreeError::IndexOutOfBounds),
    );
}

#[test]
fn replace_at_index_on_leaf() {
    for x in -3..3 {
        assert_eq!(
            Tree::leaf(x).replacing_tree_at(0, Tree::leaf(0)),
            Err(TreeError::BranchOperationPerformedOnLeaf),
        );
    }
}

#[test]
fn replace_through_path() {
    let tree = nested();
    let replaced = tree
        .replacing_tree_through(&[3, 1, 1], Tree::from_leaves(0, vec![80, 81]))
        .expect("path exists");
    assert_eq!(replaced.leaves(), [1, 2, 3, 4, 5, 6, 7, 80, 81]);
    let replaced = tree
        .replacing_tree_through(&[1], Tree::leaf(0))
        .expect("path exists");
    assert_eq!(replaced.leaves(), [1, 0, 5, 6, 7, 8]);
    // The original is untouched.
    assert_eq!(tree, nested());
}

#[test]
fn replace_through_bad_path() {
    let tree = nested();
    for path in [&[][..], &[4][..], &[1, 3][..], &[0, 0][..], &[3, 1, 1, 0][..]].iter() {
        assert_eq!(
            tree.replacing_tree_through(path, Tree::leaf(0)),
            Err(TreeError::IllFormedIndexPath),
            "path {:?}",
            path,
        );
    }
}

#[test]
fn child_operations_on_leaf_agree() {
    let leaf = Tree::leaf(0);
    assert_eq!(
        leaf.replacing_tree_at(0, Tree::leaf(1)),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
    assert_eq!(
        leaf.replacing_tree_through(&[0], Tree::leaf(1)),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
    assert_eq!(
        leaf.inserting(Tree::leaf(1), &[], 0),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
    // A leaf met halfway down is a bad path, not a bad receiver.
    assert_eq!(
        three_leaves().replacing_tree_through(&[1, 0], Tree::leaf(1)),
        Err(TreeError::IllFormedIndexPath),
    );
}

#[test]
fn insert_at_start() {
    let inserted = three_leaves()
        .inserting(Tree::from_leaves(-1, vec![4, 5]), &[], 0)
        .expect("index 0 is valid");
    assert_eq!(inserted.children().len(), 4);
    assert_eq!(inserted.leaves(), [4, 5, 1, 2, 3]);
}

#[test]
fn insert_at_end() {
    let inserted = three_leaves()
        .inserting(Tree::from_leaves(-1, vec![4, 5]), &[], 3)
        .expect("appending is valid");
    assert_eq!(inserted.leaves(), [1, 2, 3, 4, 5]);
    assert_eq!(
        three_leaves().inserting(Tree::leaf(4), &[], 4),
        Err(TreeError::IllFormedIndexPath),
    );
}

#[test]
fn insert_into_leaf() {
    assert_eq!(
        Tree::leaf(0).inserting(Tree::leaf(1), &[], 0),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
    assert_eq!(
        three_leaves().inserting(Tree::leaf(1), &[2], 0),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
    assert_eq!(
        nested().inserting(Tree::leaf(1), &[1, 0, 0], 0),
        Err(TreeError::BranchOperationPerformedOnLeaf),
    );
}

#[test]
fn insert_through_bad_path() {
    assert_eq!(
        three_leaves().inserting(Tree::leaf(1), &[3], 0),
        Err(TreeError::IllFormedIndexPath),
    );
    assert_eq!(
        nested().inserting(Tree::leaf(1), &[3, 2], 0),
        Err(TreeError::IllFormedIndexPath),
    );
}

#[test]
fn insert_through_nested_path() {
    let tree = Tree::branch(-1, vec![
        Tree::leaf(0),
        Tree::branch(-1, vec![
            Tree::leaf(1),
            Tree::branch(-1, vec![
                Tree::leaf(2),
                Tree::branch(-1, vec![
                    Tree::from_leaves(-1, vec![3, 4]),
                    Tree::leaf(10),
                ]),
            ]),
            Tree::leaf(11),
        ]),
        Tree::leaf(12),
    ]);
    assert_eq!(tree.leaves(), [0, 1, 2, 3, 4, 10, 11, 12]);
    let branch = Tree::branch(-1, vec![
        Tree::leaf(5),
        Tree::from_leaves(-1, vec![6, 7, 8]),
        Tree::leaf(9),
    ]);
    assert_eq!(branch.leaves(), [5, 6, 7, 8, 9]);

    let result = tree.inserting(branch, &[1, 1, 1], 1).expect("path exists");
    assert_eq!(result.leaves(), (0..=12).collect::<Vec<_>>());
}

#[test]
fn edits_share_untouched_subtrees() {
    let tree = nested();
    let edited = tree
        .replacing_tree_through(&[1, 0], Tree::leaf(0))
        .expect("path exists");
    match (tree.child(3), edited.child(3)) {
        (Ok(Tree::Branch(_, old)), Ok(Tree::Branch(_, new))) => assert!(Shared::ptr_eq(old, new)),
        other => panic!("unexpected children: {:?}", other),
    }
    match (tree.child(1), edited.child(1)) {
        (Ok(Tree::Branch(_, old)), Ok(Tree::Branch(_, new))) => assert!(!Shared::ptr_eq(old, new)),
        other => panic!("unexpected children: {:?}", other),
    }
}

#[test]
fn display_indents_levels() {
    let tree = Tree::branch(0, vec![Tree::leaf(1), Tree::from_leaves(2, vec![3])]);
    assert_eq!(tree.to_string(), "0\n  1\n  2\n    3");
    assert_eq!(Tree::leaf(5).to_string(), "5");
}

#[test]
fn traversable_cursors() {
    let tree = nested();
    let root = tree.cursor_to_root();
    assert!(root.is_empty());
    assert_eq!(tree.num_children_of(&root), 4);
    assert_eq!(tree.parent_of(&root), None);

    let cursor = tree.nth_child_of(&root, 3).expect("root has four children");
    assert_eq!(tree.value_of(&cursor), NodeValue::Branch(&-1));
    assert_eq!(tree.nth_child_of(&root, 4), None);
    assert_eq!(tree.parent_of(&cursor), Some(root.clone()));

    let sibling = tree.advance_cursor::<()>(IndexPath::from_slice(&[2]), VisitorDirection::NextSibling);
    assert_eq!(sibling, Ok(cursor.clone()));
    let past_end = tree.advance_cursor::<()>(cursor.clone(), VisitorDirection::NextSibling);
    assert_eq!(past_end.map_err(|e| e.recover()), Err(cursor.clone()));
    let leaf = IndexPath::from_slice(&[0]);
    assert!(tree.advance_cursor::<()>(leaf, VisitorDirection::Child(0)).is_err());
    assert!(tree.advance_cursor::<()>(root, VisitorDirection::Parent).is_err());
    assert!(tree.advance_cursor(cursor, VisitorDirection::Stop(())).is_err());
}

#[test]
#[should_panic(expected = "invalid cursor")]
fn traversable_rejects_foreign_cursor() {
    let _ = three_leaves().value_of(&IndexPath::from_slice(&[5]));
}

#[test]
fn collect_leaves_visitor() {
    for tree in [nested(), three_leaves(), Tree::leaf(9), Tree::branch(0, vec![])].iter() {
        assert_eq!(tree.traverse(CollectLeaves::new()), tree.leaves());
    }
    let subtree = nested().traverse_from(IndexPath::from_slice(&[3]), CollectLeaves::new());
    assert_eq!(subtree, [6, 7, 8]);
}

#[test]
fn traverse_iter_yields_once() {
    let tree = three_leaves();
    let mut steps = TraverseIter::new(CollectLeaves::new(), &tree);
    let result = steps.by_ref().find_map(|step| step);
    assert_eq!(result, Some(vec![1, 2, 3]));
    assert_eq!(steps.next(), None);
}

fn chain(depth: i32) -> Tree<i32> {
    let mut tree = Tree::leaf(0);
    for value in 1..=depth {
        tree = Tree::branch(value, vec![tree]);
    }
    tree
}

#[test]
fn deep_tree_drops() {
    let tree = chain(200_000);
    assert_eq!(tree.leaves(), [0]);
    drop(tree);
}

#[test]
fn deep_tree_drop_keeps_shared_parts() {
    let tree = chain(100_000);
    let mut node = &tree;
    for _ in 0..50_000 {
        node = &node.children()[0];
    }
    let half = node.clone();
    drop(tree);
    assert_eq!(half.value(), &50_000);
    assert_eq!(half.iter_leaves().count(), 1);
    assert_eq!(half.into_value(), 50_000);
}

#[test]
fn into_value_of_branch() {
    let tree = Tree::branch(String::from("root"), vec![
        Tree::leaf(String::from("a")),
        Tree::from_leaves(String::from("b"), vec![String::from("c")]),
    ]);
    let shared = tree.child(1).expect("index 1 exists").clone();
    assert_eq!(tree.into_value(), "root");
    assert_eq!(shared.leaves(), ["c"]);
}
