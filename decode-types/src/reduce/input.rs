use crate::{GameState, PadId, Phase};

pub(super) fn submit(state: &mut GameState, pad: PadId) {
    state.user_input.push(pad);
    let idx = state.user_input.len() - 1;

    if state.pattern.get(idx) != Some(&pad) {
        // Input is kept so the front end can show where it broke.
        state.phase = Phase::Fail;
        return;
    }

    if state.user_input.len() == state.pattern.len() {
        state.phase = Phase::Success;
    }
}
