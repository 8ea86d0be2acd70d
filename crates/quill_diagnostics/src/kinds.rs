//! The diagnostic taxonomy.
//!
//! One table entry per kind: its code, its fields, its severity, and the
//! message templates bound to those fields. Codes are permanent; retired kinds
//! keep their codes out of circulation.

use crate::code::DiagnosticCode;
use crate::language::{StatementKind, VariableKind};
use crate::message::{DiagnosticMessage, MessageArg, MessageSlot};
use crate::severity::Severity;
use quill_source::{Identifier, Span};
use serde::{Deserialize, Serialize};

define_diagnostics! {
    AssignmentBeforeVariableDeclaration(E001) {
        assignment: Identifier,
        declaration: Identifier,
    }
    Error("variable assigned before its declaration", assignment)
    note("variable declared here", declaration);

    AssignmentToConstGlobalVariable(E002) {
        assignment: Identifier,
    }
    Error("assignment to const global variable", assignment);

    AssignmentToConstVariable(E003) {
        declaration: Identifier,
        assignment: Identifier,
        var_kind: VariableKind,
    }
    Error("assignment to const variable", assignment)
    note("const variable declared here", declaration);

    AssignmentToConstVariableBeforeItsDeclaration(E004) {
        declaration: Identifier,
        assignment: Identifier,
        var_kind: VariableKind,
    }
    Error("assignment to const variable before its declaration", assignment)
    note("const variable declared here", declaration);

    AssignmentToUndeclaredVariable(E059) {
        assignment: Identifier,
    }
    Warning("assignment to undeclared variable", assignment);

    AwaitOperatorOutsideAsync(E162) {
        await_operator: Span,
    }
    Error("'await' is only allowed in async functions", await_operator);

    BigIntLiteralContainsDecimalPoint(E005) {
        location: Span,
    }
    Error("BigInt literal contains decimal point", location);

    BigIntLiteralContainsExponent(E006) {
        location: Span,
    }
    Error("BigInt literal contains exponent", location);

    CStyleForLoopIsMissingThirdComponent(E093) {
        expected_last_component: Span,
        existing_semicolon: Span,
    }
    Error("C-style for loop is missing its third component", expected_last_component);

    CannotAssignToVariableNamedAsyncInForOfLoop(E082) {
        async_identifier: Identifier,
    }
    Error("assigning to 'async' in a for-of loop requires parentheses", async_identifier);

    CannotDeclareAwaitInAsyncFunction(E069) {
        name: Identifier,
    }
    Error("cannot declare 'await' inside async function", name);

    CannotDeclareClassNamedLet(E007) {
        name: Span,
    }
    Error("classes cannot be named 'let'", name);

    CannotDeclareVariableNamedLetWithLet(E008) {
        name: Span,
    }
    Error("let statement cannot declare variables named 'let'", name);

    CannotDeclareVariableWithKeywordName(E124) {
        keyword: Span,
    }
    Error("cannot declare variable named keyword '{0}'", keyword);

    CannotDeclareYieldInGeneratorFunction(E071) {
        name: Identifier,
    }
    Error("cannot declare 'yield' inside generator function", name);

    CannotExportDefaultVariable(E076) {
        declaring_token: Span,
    }
    Error("cannot declare and export variable with 'export default'", declaring_token);

    CannotExportLet(E009) {
        export_name: Span,
    }
    Error("cannot export variable named 'let'", export_name);

    CannotExportVariableNamedKeyword(E144) {
        export_name: Identifier,
    }
    Error("cannot export variable named keyword '{0}'", export_name);

    CannotImportLet(E010) {
        import_name: Span,
    }
    Error("cannot import 'let'", import_name);

    CannotImportVariableNamedKeyword(E145) {
        import_name: Identifier,
    }
    Error("cannot import variable named keyword '{0}'", import_name);

    CannotReferToPrivateVariableWithoutObject(E155) {
        private_identifier: Identifier,
    }
    Error("cannot reference private variables without object; use 'this.'", private_identifier);

    CannotUpdateVariableDuringDeclaration(E136) {
        declaring_token: Span,
        updating_operator: Span,
    }
    Error("cannot update variable with '{0}' while declaring it", updating_operator)
    note("remove '{0}' to update an existing variable", declaring_token);

    CatchWithoutTry(E117) {
        catch_token: Span,
    }
    Error("unexpected 'catch' without 'try'", catch_token);

    ClassStatementNotAllowedInBody(E149) {
        kind_of_statement: StatementKind,
        expected_body: Span,
        class_keyword: Span,
    }
    Error("missing body for {1:headlinese}", expected_body, kind_of_statement)
    note(
        "a class statement is not allowed as the body of {1:singular}",
        class_keyword,
        kind_of_statement,
    );

    CharacterDisallowedInIdentifiers(E011) {
        character: Span,
    }
    Error("character is not allowed in identifiers", character);

    CommaNotAllowedAfterSpreadParameter(E070) {
        comma: Span,
        spread: Span,
    }
    Error("commas are not allowed after spread parameter", comma);

    ElseHasNoIf(E065) {
        else_token: Span,
    }
    Error("'else' has no corresponding 'if'", else_token);

    EscapedCharacterDisallowedInIdentifiers(E012) {
        escape_sequence: Span,
    }
    Error("escaped character is not allowed in identifiers", escape_sequence);

    EscapedCodePointInIdentifierOutOfRange(E013) {
        escape_sequence: Span,
    }
    Error("code point out of range", escape_sequence);

    ExtraCommaNotAllowedBetweenArguments(E068) {
        comma: Span,
    }
    Error("extra ',' is not allowed between function call arguments", comma);

    ExpectedAsBeforeImportedNamespaceAlias(E126) {
        alias: Span,
        star_token: Span,
    }
    Error(
        "expected 'as' between '{1}' and '{2}'",
        Span::between(*star_token, *alias),
        star_token,
        alias,
    );

    ExpectedCommaToSeparateObjectLiteralEntries(E131) {
        unexpected_token: Span,
    }
    Error("expected ',' between object literal entries", unexpected_token);

    ExpectedExpressionBeforeNewline(E014) {
        location: Span,
    }
    Error("expected expression before newline", location);

    ExpectedExpressionForSwitchCase(E140) {
        case_token: Span,
    }
    Error("expected expression after 'case'", case_token);

    ExpectedExpressionBeforeSemicolon(E015) {
        location: Span,
    }
    Error("expected expression before semicolon", location);

    ExpectedFromAndModuleSpecifier(E129) {
        location: Span,
    }
    Error("expected 'from \"name_of_module.mjs\"'", location);

    ExpectedFromBeforeModuleSpecifier(E128) {
        module_specifier: Span,
    }
    Error("expected 'from' before module specifier", module_specifier);

    ExpectedHexDigitsInUnicodeEscape(E016) {
        escape_sequence: Span,
    }
    Error("expected hexadecimal digits in Unicode escape sequence", escape_sequence);

    ExpectedLeftCurly(E107) {
        expected_left_curly: Span,
    }
    Error("expected '{{'", expected_left_curly);

    ExpectedRightParenForFunctionCall(E141) {
        expected_right_paren: Span,
        left_paren: Span,
    }
    Error("expected ')' to close function call", expected_right_paren)
    note("function call started here", left_paren);

    ExpectedParenthesesAroundDoWhileCondition(E084) {
        condition: Span,
    }
    Error("do-while loop needs parentheses around condition", condition);

    ExpectedParenthesisAroundDoWhileCondition(E085) {
        location: Span,
        token: char,
    }
    Error("do-while loop is missing '{1}' around condition", location, token);

    ExpectedParenthesesAroundIfCondition(E017) {
        condition: Span,
    }
    Error("if statement needs parentheses around condition", condition);

    ExpectedParenthesisAroundIfCondition(E018) {
        location: Span,
        token: char,
    }
    Error("if statement is missing '{1}' around condition", location, token);

    ExpectedParenthesesAroundSwitchCondition(E091) {
        condition: Span,
    }
    Error("switch statement needs parentheses around condition", condition);

    ExpectedParenthesisAroundSwitchCondition(E092) {
        location: Span,
        token: char,
    }
    Error("switch statement is missing '{1}' around condition", location, token);

    ExpectedParenthesesAroundWhileCondition(E087) {
        condition: Span,
    }
    Error("while loop needs parentheses around condition", condition);

    ExpectedParenthesisAroundWhileCondition(E088) {
        location: Span,
        token: char,
    }
    Error("while loop is missing '{1}' around condition", location, token);

    ExpectedParenthesesAroundWithExpression(E089) {
        expression: Span,
    }
    Error("with statement needs parentheses around expression", expression);

    ExpectedParenthesisAroundWithExpression(E090) {
        location: Span,
        token: char,
    }
    Error("with statement is missing '{1}' around expression", location, token);

    ExpectedVariableNameForCatch(E135) {
        unexpected_token: Span,
    }
    Error("expected variable name for 'catch'", unexpected_token);

    ExportingRequiresDefault(E067) {
        expression: Span,
    }
    Error("exporting requires 'default'", expression);

    ExportingRequiresCurlies(E066) {
        names: Span,
    }
    Error("exporting requires '{{' and '}'", names);

    ExportingStringNameOnlyAllowedForExportFrom(E153) {
        export_name: Span,
    }
    Error("forwarding exports are only allowed in export-from", export_name);

    FinallyWithoutTry(E118) {
        finally_token: Span,
    }
    Error("unexpected 'finally' without 'try'", finally_token);

    FunctionStatementNotAllowedInBody(E148) {
        kind_of_statement: StatementKind,
        expected_body: Span,
        function_keywords: Span,
    }
    Error("missing body for {1:headlinese}", expected_body, kind_of_statement)
    note(
        "a function statement is not allowed as the body of {1:singular}",
        function_keywords,
        kind_of_statement,
    );

    GeneratorFunctionStarBelongsBeforeName(E133) {
        function_name: Span,
        star: Span,
    }
    Error("generator function '*' belongs before function name", star);

    InDisallowedInCStyleForLoop(E108) {
        in_token: Span,
    }
    Error("'in' disallowed in C-style for loop initializer", in_token);

    IndexingRequiresExpression(E075) {
        squares: Span,
    }
    Error("indexing requires an expression", squares);

    InvalidBindingInLetStatement(E019) {
        location: Span,
    }
    Error("invalid binding in let statement", location);

    InvalidExpressionLeftOfAssignment(E020) {
        location: Span,
    }
    Error("invalid expression left of assignment", location);

    InvalidHexEscapeSequence(E060) {
        escape_sequence: Span,
    }
    Error("invalid hex escape sequence: {0}", escape_sequence);

    InvalidLoneLiteralInObjectLiteral(E021) {
        location: Span,
    }
    Error("invalid lone literal in object literal", location);

    InvalidRhsForDotOperator(E074) {
        dot: Span,
    }
    Error(
        "'.' operator needs a key name; use + to concatenate strings; \
         use [] to access with a dynamic key",
        dot,
    );

    InvalidUtf8Sequence(E022) {
        sequence: Span,
    }
    Error("invalid UTF-8 sequence", sequence);

    KeywordsCannotContainEscapeSequences(E023) {
        escape_sequence: Span,
    }
    Error("keywords cannot contain escape sequences", escape_sequence);

    LegacyOctalLiteralMayNotBeBigInt(E032) {
        characters: Span,
    }
    Error("legacy octal literal may not be BigInt", characters);

    LegacyOctalLiteralMayNotContainUnderscores(E152) {
        underscores: Span,
    }
    Error("legacy octal literals may not contain underscores", underscores);

    LetWithNoBindings(E024) {
        location: Span,
    }
    Error("let with no bindings", location);

    LexicalDeclarationNotAllowedInBody(E150) {
        kind_of_statement: StatementKind,
        expected_body: Span,
        declaring_keyword: Span,
    }
    Error("missing body for {1:headlinese}", expected_body, kind_of_statement)
    note(
        "a lexical declaration is not allowed as the body of {1:singular}",
        declaring_keyword,
        kind_of_statement,
    );

    MethodsShouldNotUseFunctionKeyword(E072) {
        function_token: Span,
    }
    Error("methods should not use the 'function' keyword", function_token);

    MissingArrayClose(E157) {
        left_square: Span,
        expected_right_square: Span,
    }
    Error("missing end of array; expected ']'", expected_right_square)
    note("array started here", left_square);

    MissingArrowFunctionParameterList(E105) {
        arrow: Span,
    }
    Error("missing parameters for arrow function", arrow);

    MissingBodyForCatchClause(E119) {
        catch_token: Span,
    }
    Error("missing body for catch clause", catch_token);

    MissingBodyForClass(E111) {
        class_keyword_and_name_and_heritage: Span,
    }
    Error("missing body for class", class_keyword_and_name_and_heritage);

    MissingBodyForDoWhileStatement(E101) {
        do_token: Span,
    }
    Error("missing body for do-while loop", do_token);

    MissingBodyForFinallyClause(E121) {
        finally_token: Span,
    }
    Error("missing body for finally clause", finally_token);

    MissingBodyForForStatement(E094) {
        for_and_header: Span,
    }
    Error("missing body for 'for' loop", for_and_header);

    MissingBodyForIfStatement(E064) {
        if_and_condition: Span,
    }
    Error("missing body for 'if' statement", if_and_condition);

    MissingBodyForSwitchStatement(E106) {
        switch_and_condition: Span,
    }
    Error("missing body for 'switch' statement", switch_and_condition);

    MissingBodyForTryStatement(E120) {
        try_token: Span,
    }
    Error("missing body for try statement", try_token);

    MissingBodyForWhileStatement(E104) {
        while_and_condition: Span,
    }
    Error("missing body for while loop", while_and_condition);

    MissingCatchOrFinallyForTryStatement(E122) {
        expected_catch_or_finally: Span,
        try_token: Span,
    }
    Error("missing catch or finally clause for try statement", expected_catch_or_finally)
    note("try statement starts here", try_token);

    MissingCatchVariableBetweenParentheses(E130) {
        left_paren: Span,
        right_paren: Span,
    }
    Error(
        "missing catch variable name between parentheses",
        left_paren.merge(*right_paren),
    );

    MissingCommaBetweenObjectLiteralEntries(E025) {
        location: Span,
    }
    Error("missing comma between object literal entries", location);

    MissingCommaBetweenVariableDeclarations(E132) {
        expected_comma: Span,
    }
    Error("missing ',' between variable declarations", expected_comma);

    MissingColonInConditionalExpression(E146) {
        expected_colon: Span,
        question: Span,
    }
    Error("missing ':' in conditional expression", expected_colon)
    note("'?' creates a conditional expression", question);

    MissingConditionForIfStatement(E138) {
        if_keyword: Span,
    }
    Error("missing condition for if statement", if_keyword);

    MissingConditionForWhileStatement(E139) {
        while_keyword: Span,
    }
    Error("missing condition for while statement", while_keyword);

    MissingConditionForSwitchStatement(E137) {
        switch_keyword: Span,
    }
    Error("missing condition for switch statement", switch_keyword);

    MissingExpressionBetweenParentheses(E078) {
        left_paren: Span,
        right_paren: Span,
    }
    Error("missing expression between parentheses", left_paren.merge(*right_paren));

    MissingForLoopHeader(E125) {
        for_token: Span,
    }
    Error("missing header and body for 'for' loop", for_token);

    MissingForLoopRhsOrComponentsAfterExpression(E097) {
        header: Span,
        for_token: Span,
    }
    Error("for loop needs an iterable, or condition and update clauses", header)
    note("use 'while' instead to loop until a condition is false", for_token);

    MissingForLoopRhsOrComponentsAfterDeclaration(E098) {
        header: Span,
        for_token: Span,
    }
    Error("for loop needs an iterable, or condition and update clauses", header);

    MissingFunctionParameterList(E073) {
        function_name: Span,
    }
    Error("missing function parameter list", function_name);

    MissingHeaderOfForLoop(E096) {
        location: Span,
    }
    Error("missing for loop header", location);

    MissingKeyForObjectEntry(E154) {
        expression: Span,
    }
    Error("unexpected expression; missing key for object entry", expression);

    MissingNameInFunctionStatement(E061) {
        location: Span,
    }
    Error("missing name in function statement", location);

    MissingNameInClassStatement(E080) {
        class_keyword: Span,
    }
    Error("missing name of class", class_keyword);

    MissingNameOfExportedClass(E081) {
        class_keyword: Span,
    }
    Error("missing name of exported class", class_keyword);

    MissingNameOfExportedFunction(E079) {
        function_keyword: Span,
    }
    Error("missing name of exported function", function_keyword);

    MissingNameOrParenthesesForFunction(E062) {
        location: Span,
        function: Span,
    }
    Error("missing name or parentheses for function", location);

    MissingOperandForOperator(E026) {
        location: Span,
    }
    Error("missing operand for operator", location);

    MissingOperatorBetweenExpressionAndArrowFunction(E063) {
        location: Span,
    }
    Error("missing operator between expression and arrow function", location);

    MissingPropertyNameForDotOperator(E142) {
        dot: Span,
    }
    Error("missing property name after '.' operator", dot);

    MissingSemicolonAfterStatement(E027) {
        location: Span,
    }
    Error("missing semicolon after statement", location);

    MissingSemicolonBetweenForLoopConditionAndUpdate(E100) {
        expected_semicolon: Span,
    }
    Error("missing semicolon between condition and update parts of for loop", expected_semicolon);

    MissingSemicolonBetweenForLoopInitAndCondition(E099) {
        expected_semicolon: Span,
    }
    Error("missing semicolon between init and condition parts of for loop", expected_semicolon);

    MissingTokenAfterExport(E113) {
        export_token: Span,
    }
    Error(
        "incomplete export; expected 'export default ...' or 'export {{name}' or \
         'export * from ...' or 'export class' or 'export function' or 'export let'",
        export_token,
    );

    MissingValueForObjectLiteralEntry(E083) {
        key: Span,
    }
    Error("missing value for object property", key);

    MissingVariableNameInDeclaration(E123) {
        equal_token: Span,
    }
    Error("missing variable name", equal_token);

    MissingWhileAndConditionForDoWhileStatement(E103) {
        do_token: Span,
        expected_while: Span,
    }
    Error("missing 'while (condition)' for do-while statement", expected_while)
    note("do-while statement starts here", do_token);

    NumberLiteralContainsConsecutiveUnderscores(E028) {
        underscores: Span,
    }
    Error("number literal contains consecutive underscores", underscores);

    NumberLiteralContainsTrailingUnderscores(E029) {
        underscores: Span,
    }
    Error("number literal contains trailing underscore(s)", underscores);

    OctalLiteralMayNotHaveExponent(E030) {
        characters: Span,
    }
    Error("octal literal may not have exponent", characters);

    OctalLiteralMayNotHaveDecimal(E031) {
        characters: Span,
    }
    Error("octal literal may not have decimal", characters);

    PrivatePropertiesAreNotAllowedInObjectLiterals(E156) {
        private_identifier: Identifier,
    }
    Error("private properties are not allowed in object literals", private_identifier);

    RedeclarationOfGlobalVariable(E033) {
        redeclaration: Identifier,
    }
    Error("redeclaration of global variable", redeclaration);

    RedeclarationOfVariable(E034) {
        redeclaration: Identifier,
        original_declaration: Identifier,
    }
    Error("redeclaration of variable: {0}", redeclaration)
    note("variable already declared here", original_declaration);

    RegexpLiteralFlagsCannotContainUnicodeEscapes(E035) {
        escape_sequence: Span,
    }
    Error("RegExp literal cannot contain Unicode escapes", escape_sequence);

    StrayCommaInLetStatement(E036) {
        location: Span,
    }
    Error("stray comma in let statement", location);

    TypescriptEnumNotImplemented(E127) {
        enum_keyword: Span,
    }
    Error("TypeScript's 'enum' feature is not yet implemented by quill", enum_keyword);

    UnclosedBlockComment(E037) {
        comment_open: Span,
    }
    Error("unclosed block comment", comment_open);

    UnclosedCodeBlock(E134) {
        block_open: Span,
    }
    Error("unclosed code block; expected '}' by end of file", block_open);

    UnclosedIdentifierEscapeSequence(E038) {
        escape_sequence: Span,
    }
    Error("unclosed identifier escape sequence", escape_sequence);

    UnclosedObjectLiteral(E161) {
        object_open: Span,
        expected_object_close: Span,
    }
    Error("unclosed object literal; expected '}'", expected_object_close)
    note("object literal started here", object_open);

    UnclosedRegexpLiteral(E039) {
        regexp_literal: Span,
    }
    Error("unclosed regexp literal", regexp_literal);

    UnclosedStringLiteral(E040) {
        string_literal: Span,
    }
    Error("unclosed string literal", string_literal);

    UnclosedTemplate(E041) {
        incomplete_template: Span,
    }
    Error("unclosed template", incomplete_template);

    UnexpectedAtCharacter(E042) {
        character: Span,
    }
    Error("unexpected '@'", character);

    UnexpectedArrowAfterExpression(E160) {
        arrow: Span,
        expression: Span,
    }
    Error("unexpected '{0}'", arrow)
    note("expected parameter for arrow function, but got an expression instead", expression);

    UnexpectedArrowAfterLiteral(E158) {
        arrow: Span,
        literal_parameter: Span,
    }
    Error("unexpected '{0}'", arrow)
    note("expected parameter for arrow function, but got a literal instead", literal_parameter);

    UnexpectedBackslashInIdentifier(E043) {
        backslash: Span,
    }
    Error("unexpected '\\' in identifier", backslash);

    UnexpectedCaseOutsideSwitchStatement(E115) {
        case_token: Span,
    }
    Error("unexpected 'case' outside switch statement", case_token);

    UnexpectedCharactersInNumber(E044) {
        characters: Span,
    }
    Error("unexpected characters in number literal", characters);

    UnexpectedControlCharacter(E045) {
        character: Span,
    }
    Error("unexpected control character", character);

    UnexpectedCharactersInBinaryNumber(E046) {
        characters: Span,
    }
    Error("unexpected characters in binary literal", characters);

    UnexpectedCharactersInOctalNumber(E047) {
        characters: Span,
    }
    Error("unexpected characters in octal literal", characters);

    UnexpectedCharactersInHexNumber(E048) {
        characters: Span,
    }
    Error("unexpected characters in hex literal", characters);

    UnexpectedDefaultOutsideSwitchStatement(E116) {
        default_token: Span,
    }
    Error("unexpected 'default' outside switch statement", default_token);

    UnexpectedLiteralInParameterList(E159) {
        literal: Span,
    }
    Error("unexpected literal in parameter list; expected parameter name", literal);

    UnexpectedSemicolonInCStyleForLoop(E102) {
        semicolon: Span,
    }
    Error("C-style for loops have only three semicolon-separated components", semicolon);

    UnexpectedSemicolonInForInLoop(E110) {
        semicolon: Span,
    }
    Error("for-in loop expression cannot have semicolons", semicolon);

    UnexpectedSemicolonInForOfLoop(E109) {
        semicolon: Span,
    }
    Error("for-of loop expression cannot have semicolons", semicolon);

    NoDigitsInBinaryNumber(E049) {
        characters: Span,
    }
    Error("binary number literal has no digits", characters);

    NoDigitsInHexNumber(E050) {
        characters: Span,
    }
    Error("hex number literal has no digits", characters);

    NoDigitsInOctalNumber(E051) {
        characters: Span,
    }
    Error("octal number literal has no digits", characters);

    UnexpectedHashCharacter(E052) {
        location: Span,
    }
    Error("unexpected '#'", location);

    UnexpectedIdentifier(E053) {
        location: Span,
    }
    Error("unexpected identifier", location);

    UnexpectedIdentifierInExpression(E147) {
        unexpected: Identifier,
    }
    Error("unexpected identifier in expression; missing operator before", unexpected);

    // Prefer a more specific kind; this one tells the user very little.
    UnexpectedToken(E054) {
        token: Span,
    }
    Error("unexpected token", token);

    UnexpectedTokenAfterExport(E112) {
        unexpected_token: Span,
    }
    Error(
        "unexpected token in export; expected 'export default ...' or 'export {{name}' or \
         'export * from ...' or 'export class' or 'export function' or 'export let'",
        unexpected_token,
    );

    UnexpectedTokenInVariableDeclaration(E114) {
        unexpected_token: Span,
    }
    Error("unexpected token in variable declaration; expected variable name", unexpected_token);

    UnmatchedIndexingBracket(E055) {
        left_square: Span,
    }
    Error("unmatched indexing bracket", left_square);

    UnmatchedParenthesis(E056) {
        location: Span,
    }
    Error("unmatched parenthesis", location);

    UnmatchedRightCurly(E143) {
        right_curly: Span,
    }
    Error("unmatched '}'", right_curly);

    UseOfUndeclaredVariable(E057) {
        name: Identifier,
    }
    Warning("use of undeclared variable: {0}", name);

    VariableUsedBeforeDeclaration(E058) {
        usage: Identifier,
        declaration: Identifier,
    }
    Error("variable used before declaration: {0}", usage)
    note("variable declared here", declaration);

    InvalidBreak(E200) {
        break_statement: Span,
    }
    Error("break can only be used inside of a loop or switch", break_statement);

    InvalidContinue(E201) {
        continue_statement: Span,
    }
    Error("continue can only be used inside of a loop", continue_statement);
}
