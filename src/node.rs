use std::fmt;

/// One expression in the tree. Each kind owns exactly the children it needs.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum Node {
    /// Empty node. Has no children.
    #[default]
    None,
    Integer(i64),
    Unary {
        op: Box<str>,
        operand: Box<Node>,
    },
    Binary {
        op: Box<str>,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Ternary {
        op: Box<str>,
        first: Box<Node>,
        second: Box<Node>,
        third: Box<Node>,
    },
}

impl Node {
    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    pub fn unary(op: impl Into<Box<str>>, operand: Node) -> Self {
        Self::Unary {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: impl Into<Box<str>>, lhs: Node, rhs: Node) -> Self {
        Self::Binary {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn ternary(op: impl Into<Box<str>>, first: Node, second: Node, third: Node) -> Self {
        Self::Ternary {
            op: op.into(),
            first: Box::new(first),
            second: Box::new(second),
            third: Box::new(third),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The operator of a unary, binary or ternary node.
    pub fn op(&self) -> Option<&str> {
        match self {
            Self::Unary { op, .. } | Self::Binary { op, .. } | Self::Ternary { op, .. } => {
                Some(&**op)
            }
            Self::None | Self::Integer(_) => None,
        }
    }

    /// Children in left to right order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let slots: [Option<&Node>; 3] = match self {
            Self::None | Self::Integer(_) => [None, None, None],
            Self::Unary { operand, .. } => [Some(&**operand), None, None],
            Self::Binary { lhs, rhs, .. } => [Some(&**lhs), Some(&**rhs), None],
            Self::Ternary {
                first,
                second,
                third,
                ..
            } => [Some(&**first), Some(&**second), Some(&**third)],
        };
        slots.into_iter().flatten()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children().nth(index)
    }

    pub fn arity(&self) -> usize {
        self.children().count()
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::None => write!(f, "()"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unary { op, .. } | Self::Binary { op, .. } | Self::Ternary { op, .. } => {
                write!(f, "({op}")?;
                for child in self.children() {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
