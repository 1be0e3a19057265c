//! 上位語の祖先木

use std::fmt;

use crate::synset::Synset;

/// 祖先木のノード
///
/// ノードはアリーナ（[`AncestorTree`] 内のベクタ）に格納され、インデックスで参照し合います。
#[derive(Clone, Debug)]
struct Node<'db> {
    synset: Synset<'db>,
    parent: Option<usize>,
    children: Vec<usize>,
    depth: usize,
    cycle_cut: bool,
}

/// シンセットの上位語を再帰的に展開した木
///
/// 根はシンセット自身で、各ノードの子は直接の上位語（[`Synset::hypernyms`] の順）です。
/// 複数の経路で到達できる祖先は、経路ごとに別のノードとして現れます。
///
/// 根からのパス上に既に現れたIDに再び到達した場合、そのノードは子を持たない
/// 葉として追加され、[`AncestorNode::is_cycle_cut`] が `true` になります。
#[derive(Clone, Debug)]
pub struct AncestorTree<'db> {
    nodes: Vec<Node<'db>>,
}

impl<'db> AncestorTree<'db> {
    /// 指定されたシンセットを根とする祖先木を構築します。
    pub(crate) fn build(root: Synset<'db>) -> Self {
        let mut nodes = vec![Node {
            synset: root,
            parent: None,
            children: vec![],
            depth: 0,
            cycle_cut: false,
        }];

        let mut stack = vec![0];
        while let Some(i) = stack.pop() {
            let depth = nodes[i].depth + 1;
            let mut children = vec![];
            for hypernym in nodes[i].synset.hypernyms() {
                let cycle_cut = Self::on_path(&nodes, i, hypernym.id());
                children.push(nodes.len());
                nodes.push(Node {
                    synset: hypernym,
                    parent: Some(i),
                    children: vec![],
                    depth,
                    cycle_cut,
                });
            }
            stack.extend(children.iter().copied().filter(|&c| !nodes[c].cycle_cut));
            nodes[i].children = children;
        }

        Self { nodes }
    }

    /// `id` が `i` から根までのパス上にあるかどうか。
    fn on_path(nodes: &[Node<'db>], mut i: usize, id: u32) -> bool {
        loop {
            if nodes[i].synset.id() == id {
                return true;
            }
            match nodes[i].parent {
                Some(parent) => i = parent,
                None => return false,
            }
        }
    }

    /// 根ノード。
    #[inline(always)]
    pub fn root(&self) -> AncestorNode<'_, 'db> {
        AncestorNode {
            tree: self,
            index: 0,
        }
    }

    /// 木の高さ（根から最も深い葉までの辺数）。
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// ノード数。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 根が常に存在するため、常に `false` です。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 行きがけ順のノードのイテレータ。
    pub fn iter(&self) -> impl Iterator<Item = AncestorNode<'_, 'db>> + '_ {
        let mut stack = vec![0];
        std::iter::from_fn(move || {
            let index = stack.pop()?;
            stack.extend(self.nodes[index].children.iter().rev());
            Some(AncestorNode { tree: self, index })
        })
    }
}

/// [`AncestorTree`] 内のノードへの参照
#[derive(Clone, Copy)]
pub struct AncestorNode<'t, 'db> {
    tree: &'t AncestorTree<'db>,
    index: usize,
}

impl<'t, 'db> AncestorNode<'t, 'db> {
    #[inline(always)]
    fn node(&self) -> &'t Node<'db> {
        &self.tree.nodes[self.index]
    }

    /// このノードのシンセット。
    #[inline(always)]
    pub fn synset(&self) -> Synset<'db> {
        self.node().synset
    }

    /// 根からの深さ。
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.node().depth
    }

    /// 子ノード（直接の上位語）のイテレータ。
    pub fn children(&self) -> impl Iterator<Item = AncestorNode<'t, 'db>> + 't {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&index| AncestorNode { tree, index })
    }

    /// 巡回のためにここで展開を打ち切ったかどうか。
    #[inline(always)]
    pub fn is_cycle_cut(&self) -> bool {
        self.node().cycle_cut
    }
}

impl fmt::Debug for AncestorNode<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AncestorNode")
            .field("synset", &self.synset())
            .field("depth", &self.depth())
            .field("cycle_cut", &self.is_cycle_cut())
            .finish()
    }
}

impl fmt::Display for AncestorTree<'_> {
    /// 深さに応じて字下げした行きがけ順で出力します。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            write!(f, "{:indent$}{}", "", node.synset(), indent = node.depth() * 2)?;
            if node.is_cycle_cut() {
                f.write_str(" (cycle)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
