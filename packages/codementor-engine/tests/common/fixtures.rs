//! C++ snippet fixtures

/// Sums two integers read from stdin; no rule should fire
pub const CLEAN_SUM: &str = r#"#include <iostream>
using namespace std;

int main() {
    int a, b;
    cin >> a >> b;
    cout << a + b << endl;
    return 0;
}
"#;

pub const DIVISION_BY_ZERO: &str = r#"int main() {
    int total = 10;
    int avg = total / 0;
    return avg;
}
"#;

pub const LEAKY_ALLOCATION: &str = r#"void fill() {
    int* data = new int[100];
    data[0] = 1;
}
"#;

pub const UNINITIALIZED_POINTER: &str = r#"void touch() {
    int *p;
    *p = 3;
}
"#;

pub const MISSING_SEMICOLON: &str = r#"int main() {
    int x = 5
    return x;
}
"#;

/// Division and leak together; division must win
pub const DIVISION_AND_LEAK: &str = r#"int main() {
    int* buf = new int[8];
    return buf[0] /0;
}
"#;

/// Wrap a statement in a minimal `main`
pub fn fixture_in_main(statement: &str) -> String {
    format!("int main() {{\n    {statement}\n    return 0;\n}}\n")
}
