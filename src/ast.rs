use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GetData, GroupingData, LogicalData,
    SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::literal::Literal;
use crate::stmt::{
    BlockData, ClassData, ExpressionData, FunctionData, IfData, PrintData, ReturnData, Stmt,
    StmtVisitor, VarData, WhileData,
};

/// Renders a node as a parenthesized s-expression.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$x.accept($self);
            )*
            string += ")";

            string
        }
    };
}

/// Renders the syntax tree in a parenthesized prefix notation.
///
/// Mostly a debugging aid; the tests also use it as a structural oracle for
/// the parser, since two trees print identically only when they have the
/// same shape.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> String {
        literal.to_string()
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> String {
        parenthesize!(self, &unary.operator.lexeme, unary.right)
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> String {
        parenthesize!(self, &binary.operator.lexeme, binary.left, binary.right)
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> String {
        parenthesize!(self, &logical.operator.lexeme, logical.left, logical.right)
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> String {
        parenthesize!(self, "group", grouping.expr)
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> String {
        variable.name.lexeme.clone()
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> String {
        parenthesize!(self, &format!("= {}", assign.name.lexeme), assign.value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> String {
        let mut string = call.callee.accept(self);
        string += "(";
        string += &call.arguments.iter()
            .map(|argument| argument.accept(self))
            .collect::<Vec<String>>()
            .join(" ");
        string += ")";

        string
    }

    fn visit_get_expr(&mut self, get: &GetData) -> String {
        format!("(. {} {})", get.object.accept(self), get.name.lexeme)
    }

    fn visit_set_expr(&mut self, set: &SetData) -> String {
        format!(
            "(= (. {} {}) {})",
            set.object.accept(self),
            set.name.lexeme,
            set.value.accept(self),
        )
    }

    fn visit_this_expr(&mut self, _this: &ThisData) -> String {
        "this".to_string()
    }

    fn visit_super_expr(&mut self, sup: &SuperData) -> String {
        format!("(super {})", sup.method.lexeme)
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionData) -> String {
        parenthesize!(self, "expr", stmt.expr)
    }

    fn visit_print_stmt(&mut self, stmt: &PrintData) -> String {
        parenthesize!(self, "print", stmt.expr)
    }

    fn visit_var_stmt(&mut self, stmt: &VarData) -> String {
        match &stmt.initializer {
            Some(initializer) => format!("(var {} = {})", stmt.name.lexeme, initializer.accept(self)),
            None => format!("(var {})", stmt.name.lexeme),
        }
    }

    fn visit_block_stmt(&mut self, stmt: &BlockData) -> String {
        let mut string = String::from("{");
        for statement in &stmt.statements {
            string += " ";
            string += &statement.accept(self);
        }
        string += " }";

        string
    }

    fn visit_if_stmt(&mut self, stmt: &IfData) -> String {
        let mut string = format!(
            "(if {} {}",
            stmt.condition.accept(self),
            stmt.then_branch.accept(self),
        );
        if let Some(else_branch) = &stmt.else_branch {
            string += " else ";
            string += &else_branch.accept(self);
        }
        string += ")";

        string
    }

    fn visit_while_stmt(&mut self, stmt: &WhileData) -> String {
        parenthesize!(self, "while", stmt.condition, stmt.body)
    }

    fn visit_function_stmt(&mut self, stmt: &FunctionData) -> String {
        let params = stmt.params.iter()
            .map(|param| param.lexeme.clone())
            .collect::<Vec<String>>()
            .join(" ");
        let body = stmt.body.iter()
            .map(|statement| statement.accept(self))
            .collect::<Vec<String>>()
            .join(" ");

        format!("(fun {}({params}) {{ {body} }})", stmt.name.lexeme)
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnData) -> String {
        match &stmt.value {
            Some(value) => parenthesize!(self, "return", value),
            None => "(return)".to_string(),
        }
    }

    fn visit_class_stmt(&mut self, stmt: &ClassData) -> String {
        let mut string = format!("(class {}", stmt.name.lexeme);
        if let Some(superclass) = &stmt.superclass {
            string += &format!(" < {}", superclass.name.lexeme);
        }
        for method in &stmt.methods {
            string += " ";
            string += &self.visit_function_stmt(method);
        }
        string += ")";

        string
    }
}
