use crate::error::NodeError;

/// The only tag allowed to carry an empty value.
pub const IMG_TAG: &str = "img";

/// HTML attributes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders `key="value"` pairs joined by single spaces.
    ///
    /// Values are emitted verbatim: quotes and ampersands are not escaped.
    pub fn to_attribute_string(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A node holding a direct value and no children.
///
/// Without a tag the value is emitted raw, which is how plain inline text is
/// represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    props: Props,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Result<Self, NodeError> {
        Self::with_props(tag, value, Props::new())
    }

    /// Fails when `value` is empty, unless the tag is `img`.
    pub fn with_props(
        tag: Option<&str>,
        value: impl Into<String>,
        props: Props,
    ) -> Result<Self, NodeError> {
        let leaf = Self {
            tag: tag.map(str::to_string),
            value: value.into(),
            props,
        };
        leaf.check()?;
        Ok(leaf)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    fn check(&self) -> Result<(), NodeError> {
        if self.value.is_empty() && self.tag.as_deref() != Some(IMG_TAG) {
            return Err(NodeError::MissingValue {
                tag: self.tag.clone(),
            });
        }
        Ok(())
    }

    pub fn render(&self) -> Result<String, NodeError> {
        self.check()?;
        let Some(tag) = self.tag.as_deref() else {
            return Ok(self.value.clone());
        };
        let open = open_tag(tag, &self.props);
        if tag == IMG_TAG {
            // void element: no closing tag
            Ok(format!("{open}{}", self.value))
        } else {
            Ok(format!("{open}{}</{tag}>", self.value))
        }
    }
}

/// A node holding children and no direct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    props: Props,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        Self::with_props(tag, children, Props::new())
    }

    /// Fails when `tag` is empty or `children` is empty.
    pub fn with_props(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        props: Props,
    ) -> Result<Self, NodeError> {
        let parent = Self {
            tag: tag.into(),
            children,
            props,
        };
        parent.check()?;
        Ok(parent)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    fn check(&self) -> Result<(), NodeError> {
        if self.tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        if self.children.is_empty() {
            return Err(NodeError::MissingChildren {
                tag: self.tag.clone(),
            });
        }
        Ok(())
    }

    pub fn render(&self) -> Result<String, NodeError> {
        self.check()?;
        let mut html = open_tag(&self.tag, &self.props);
        for child in &self.children {
            html.push_str(&child.render()?);
        }
        html.push_str("</");
        html.push_str(&self.tag);
        html.push('>');
        Ok(html)
    }
}

/// An element of the renderable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Shorthand for a tagged leaf without attributes.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Result<Self, NodeError> {
        LeafNode::new(tag, value).map(Self::Leaf)
    }

    /// Shorthand for a parent without attributes.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        ParentNode::new(tag, children).map(Self::Parent)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Serializes the tree depth-first into an HTML string.
    pub fn render(&self) -> Result<String, NodeError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn open_tag(tag: &str, props: &Props) -> String {
    if props.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} {}>", props.to_attribute_string())
    }
}
