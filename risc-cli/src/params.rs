//! Command-line parameters → initial stack contents.
//!
//! Layout, bottom of the stack first:
//!
//! ```text
//! [0]            argc
//! [1 ..= argc]   index of the first character of each parameter
//! ...            each parameter's code points followed by a 0 terminator
//! ```

/// Build the initial stack for `params`.
pub fn argv_stack<S: AsRef<str>>(params: &[S]) -> Vec<i64> {
    let argc = params.len();
    let mut stack = vec![0; argc + 1];
    stack[0] = argc as i64;

    for (i, param) in params.iter().enumerate() {
        stack[i + 1] = stack.len() as i64;
        stack.extend(param.as_ref().chars().map(|c| c as i64));
        stack.push(0);
    }

    stack
}
