use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{RuntimeError, Unwind};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprId, ExprVisitor, GetData, GroupingData,
    LogicalData, SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{
    BlockData, ClassData, ExpressionData, FunctionData, IfData, PrintData, ReturnData, Stmt,
    StmtVisitor, VarData, WhileData,
};
use crate::token::{Kind, Token};

type EvalResult = Result<Object, Unwind>;
type ExecResult = Result<(), Unwind>;

/// Walks the statement list and executes it.
///
/// The interpreter owns the globals, the environment active for the
/// statement being executed, and the hop-count table filled in by the
/// resolver. Program output goes to the borrowed writer so tests can run
/// against an in-memory buffer.
pub struct Interpreter<'a> {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<ExprId, usize>,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        for native in NativeFunction::prelude() {
            let name = native.name;
            globals.borrow_mut().define(name, Object::Native(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Executes a program. The first runtime error aborts the remaining
    /// statements and is handed back to the caller for reporting.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(Unwind::Error(error)) => return Err(error),
                Err(Unwind::Return(_)) => unreachable!("the resolver rejects top-level returns"),
            }
        }

        Ok(())
    }

    /// Records the hop count for a resolved expression.
    pub fn resolve(&mut self, id: ExprId, depth: usize) {
        self.locals.insert(id, depth);
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Runs `statements` against `environment`, restoring the previous
    /// environment on every exit path, including returns and errors.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);
        let result = statements.iter().try_for_each(|statement| self.execute(statement));
        self.environment = previous;

        result
    }

    /// Reads a variable through its resolved hop count, or dynamically from
    /// the globals when the resolver recorded nothing for it.
    fn look_up_variable(&self, name: &Token, id: ExprId) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, &name.lexeme)
                .ok_or_else(|| {
                    RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme))
                }),
            None => self.globals.borrow().get(name),
        }
    }

    fn number_operand(operator: &Token, operand: &Object) -> Result<f64, RuntimeError> {
        match operand {
            Object::Literal(Literal::Number(n)) => Ok(*n),
            _ => Err(RuntimeError::new(operator, "Operand must be a number.")),
        }
    }

    fn number_operands(
        operator: &Token,
        left: &Object,
        right: &Object,
    ) -> Result<(f64, f64), RuntimeError> {
        match (left, right) {
            (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => {
                Ok((*l, *r))
            }
            _ => Err(RuntimeError::new(operator, "Operands must be numbers.")),
        }
    }
}

impl ExprVisitor<EvalResult> for Interpreter<'_> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Object::Literal(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, grouping: &GroupingData) -> EvalResult {
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryData) -> EvalResult {
        let right = self.evaluate(&unary.right)?;

        match unary.operator.kind {
            Kind::Minus => {
                let value = Self::number_operand(&unary.operator, &right)?;
                Ok(Object::from(-value))
            }
            Kind::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!("unary operator {:?}", unary.operator.kind),
        }
    }

    fn visit_binary_expr(&mut self, binary: &BinaryData) -> EvalResult {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        let value = match operator.kind {
            Kind::Greater => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Object::from(l > r)
            }
            Kind::GreaterEqual => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Object::from(l >= r)
            }
            Kind::Less => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Object::from(l < r)
            }
            Kind::LessEqual => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Object::from(l <= r)
            }
            Kind::Minus => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Object::from(l - r)
            }
            Kind::Star => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Object::from(l * r)
            }
            Kind::Slash => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                if r == 0.0 {
                    return Err(RuntimeError::new(operator, "Cannot divide by zero.").into());
                }
                Object::from(l / r)
            }
            Kind::Plus => match (&left, &right) {
                (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => {
                    Object::from(l + r)
                }
                (Object::Literal(Literal::String(l)), Object::Literal(Literal::String(r))) => {
                    Object::from(format!("{l}{r}"))
                }
                _ => {
                    return Err(RuntimeError::new(
                        operator,
                        "Operands must be two numbers or two strings.",
                    ).into());
                }
            },
            Kind::EqualEqual => Object::from(left == right),
            Kind::BangEqual => Object::from(left != right),
            _ => unreachable!("binary operator {:?}", operator.kind),
        };

        Ok(value)
    }

    fn visit_logical_expr(&mut self, logical: &LogicalData) -> EvalResult {
        let left = self.evaluate(&logical.left)?;

        // Short-circuiting yields the raw operand, not a coerced bool.
        if logical.operator.kind == Kind::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&logical.right)
    }

    fn visit_variable_expr(&mut self, variable: &VariableData) -> EvalResult {
        Ok(self.look_up_variable(&variable.name, variable.id)?)
    }

    fn visit_assign_expr(&mut self, assign: &AssignData) -> EvalResult {
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.id) {
            Some(&distance) => {
                self.environment.borrow_mut().assign_at(distance, &assign.name, value.clone());
            }
            None => self.globals.borrow_mut().assign(&assign.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, call: &CallData) -> EvalResult {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function,
            Object::Native(native) => native,
            Object::Class(class) => class,
            _ => {
                return Err(RuntimeError::new(
                    &call.paren,
                    "Can only call functions and classes.",
                ).into());
            }
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError::new(
                &call.paren,
                format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            ).into());
        }

        Ok(callable.call(self, arguments)?)
    }

    fn visit_get_expr(&mut self, get: &GetData) -> EvalResult {
        let object = self.evaluate(&get.object)?;

        if let Object::Instance(instance) = &object {
            return Ok(instance.borrow().get(&get.name, &object)?);
        }

        Err(RuntimeError::new(&get.name, "Only instances have properties.").into())
    }

    fn visit_set_expr(&mut self, set: &SetData) -> EvalResult {
        let object = self.evaluate(&set.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError::new(&set.name, "Only instances have fields.").into());
        };

        let value = self.evaluate(&set.value)?;
        instance.borrow_mut().set(&set.name, value.clone());

        Ok(value)
    }

    fn visit_this_expr(&mut self, this: &ThisData) -> EvalResult {
        Ok(self.look_up_variable(&this.keyword, this.id)?)
    }

    fn visit_super_expr(&mut self, sup: &SuperData) -> EvalResult {
        let distance = *self.locals.get(&sup.id).expect("'super' to be resolved");

        let superclass = self.environment.borrow().get_at(distance, "super")
            .expect("'super' to be defined at the resolved depth");
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' resolves to a class");
        };

        // The implicit `this` scope sits directly inside the `super` scope.
        let this = self.environment.borrow().get_at(distance - 1, "this")
            .expect("'this' to be defined inside the 'super' scope");

        let Some(method) = superclass.find_method(&sup.method.lexeme) else {
            return Err(RuntimeError::new(
                &sup.method,
                format!("Undefined property '{}'.", sup.method.lexeme),
            ).into());
        };

        Ok(Object::from(method.bind(this)))
    }
}

impl StmtVisitor<ExecResult> for Interpreter<'_> {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionData) -> ExecResult {
        self.evaluate(&stmt.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &PrintData) -> ExecResult {
        let value = self.evaluate(&stmt.expr)?;
        writeln!(self.output, "{value}").expect("output stream to be writable");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &VarData) -> ExecResult {
        let value = match &stmt.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::nil(),
        };

        self.environment.borrow_mut().define(&stmt.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &BlockData) -> ExecResult {
        let environment = Environment::with_enclosing(Rc::clone(&self.environment));
        self.execute_block(&stmt.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, stmt: &IfData) -> ExecResult {
        if self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.then_branch)
        } else if let Some(else_branch) = &stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &WhileData) -> ExecResult {
        while self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &FunctionData) -> ExecResult {
        let function = Function::new(stmt, Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&stmt.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnData) -> ExecResult {
        let value = match &stmt.value {
            Some(value) => self.evaluate(value)?,
            None => Object::nil(),
        };

        Err(Unwind::Return(value))
    }

    fn visit_class_stmt(&mut self, stmt: &ClassData) -> ExecResult {
        let superclass = match &stmt.superclass {
            Some(variable) => {
                let value = self.look_up_variable(&variable.name, variable.id)?;
                let Object::Class(class) = value else {
                    return Err(RuntimeError::new(
                        &variable.name,
                        "Superclass must be a class.",
                    ).into());
                };
                Some(class)
            }
            None => None,
        };

        self.environment.borrow_mut().define(&stmt.name.lexeme, Object::nil());

        // Methods of a subclass capture an extra scope that pins down
        // `super`; it is popped again once the method table is built.
        let previous = superclass.as_ref().map(|class| {
            let mut environment = Environment::with_enclosing(Rc::clone(&self.environment));
            environment.define("super", Object::Class(Rc::clone(class)));
            mem::replace(&mut self.environment, Rc::new(RefCell::new(environment)))
        });

        let mut methods = HashMap::new();
        for method in &stmt.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(method, Rc::clone(&self.environment), is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        let class = Rc::new(Class::new(stmt.name.lexeme.clone(), superclass, methods));

        if let Some(previous) = previous {
            self.environment = previous;
        }

        self.environment.borrow_mut().assign(&stmt.name, Object::Class(class))?;
        Ok(())
    }
}
