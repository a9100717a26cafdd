pub mod hooks;
pub mod model;

use hooks::Hook;
use model::State;

/// Run until the machine terminates or `tmax` steps have executed.
/// Returns the final state and the number of executed steps.
pub fn run(
    mut state: State,
    hooks: &mut [Box<dyn Hook>],
    tmax: Option<u64>,
) -> Result<(State, u64), String> {
    state = hooks.iter_mut().fold(state, |state, hook| hook.init(state));

    let mut time = 0;
    while tmax.map_or(true, |tmax| time < tmax) && !state.is_terminated() {
        let (addr, code) = state
            .exec(time)
            .map_err(|msg| format!("{} at {:0>4X}", msg, state.pc()))?;
        state = hooks
            .iter_mut()
            .fold(state, |state, hook| hook.exec(time, addr, code, state));
        time += 1;
    }
    Ok((state, time))
}
