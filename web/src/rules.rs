use yew::prelude::*;

use crate::utils::Modal;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct RulesProps {
    #[prop_or_default]
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(RulesView)]
pub(crate) fn rules_view(props: &RulesProps) -> Html {
    let cb_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // clicking the backdrop (the dialog element itself) also closes
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    html! {
        <Modal>
            <dialog id="rules-modal" open={props.open} onclick={on_backdrop}>
                <article>
                    <h2>{"How to play"}</h2>
                    <ul>
                        <li>{"Players take turns dropping a token into one of the seven columns."}</li>
                        <li>{"Tokens fall to the lowest open cell of the column."}</li>
                        <li>{"The first player to line up four tokens horizontally, vertically or diagonally wins."}</li>
                        <li>{"If the board fills up with no line of four, the game is a draw."}</li>
                    </ul>
                    <footer>
                        <button id="btn-close-rules" onclick={cb_close}>{"Close"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
