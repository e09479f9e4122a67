// Host-side tests for the toggle widget, run against the in-memory tree.

use std::rc::Rc;
use toggle_core::memory::NodeId;
use toggle_core::*;

const SCENARIO: &str = r#"<div class="dummy-section"><div class="dummy-wrapper"><button class="dummy-btn"/><span class="dummy-msg"></span></div></div>"#;

fn find(dom: &MemoryDom, selector: &str) -> NodeId {
    dom.query_first(&dom.root(), selector).unwrap().unwrap()
}

fn mount(dom: &Rc<MemoryDom>, container: Option<NodeId>) -> ToggleWidget<MemoryDom> {
    ToggleWidget::new(dom.clone(), container.as_ref(), Rc::new(Selectors::default()))
}

fn changed_nodes(before: &[Vec<String>], after: &[Vec<String>]) -> Vec<usize> {
    before
        .iter()
        .zip(after)
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn absent_container_is_inert() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let widget = mount(&dom, None);
    assert_eq!(widget.trigger_count(), 0);
    assert_eq!(widget.listener_count(), 0);
    assert!(widget.container().is_none());
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn container_without_triggers_binds_nothing() {
    let dom = Rc::new(
        MemoryDom::parse(r#"<div class="dummy-section"><p class="copy">text</p></div>"#).unwrap(),
    );
    let section = find(&dom, ".dummy-section");
    let widget = mount(&dom, Some(section));
    assert_eq!(widget.trigger_count(), 0);
    assert_eq!(widget.listener_count(), 0);
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn one_click_toggles_only_the_message() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let section = find(&dom, ".dummy-section");
    let button = find(&dom, ".dummy-btn");
    let msg = find(&dom, ".dummy-msg");
    let _widget = mount(&dom, Some(section));

    let before = dom.class_snapshot();
    assert_eq!(dom.click(button), 1);
    let after = dom.class_snapshot();

    assert!(dom.has_class(&msg, VISIBLE_CLASS));
    assert_eq!(changed_nodes(&before, &after), vec![msg.index()]);
}

#[test]
fn two_clicks_restore_the_original_state() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let section = find(&dom, ".dummy-section");
    let button = find(&dom, ".dummy-btn");
    let _widget = mount(&dom, Some(section));

    let before = dom.class_snapshot();
    dom.click(button);
    dom.click(button);
    assert_eq!(dom.class_snapshot(), before);
}

#[test]
fn markup_visible_state_is_respected() {
    let dom = Rc::new(
        MemoryDom::parse(
            r#"<div class="dummy-section"><div class="dummy-wrapper">
                 <button class="dummy-btn"></button>
                 <span class="dummy-msg is-visible"></span>
               </div></div>"#,
        )
        .unwrap(),
    );
    let section = find(&dom, ".dummy-section");
    let button = find(&dom, ".dummy-btn");
    let msg = find(&dom, ".dummy-msg");
    let _widget = mount(&dom, Some(section));

    dom.click(button);
    assert!(!dom.has_class(&msg, VISIBLE_CLASS));
}

#[test]
fn trigger_without_wrapper_is_a_silent_no_op() {
    let dom = Rc::new(
        MemoryDom::parse(
            r#"<div class="dummy-section"><button class="dummy-btn"></button><span class="dummy-msg"></span></div>"#,
        )
        .unwrap(),
    );
    let section = find(&dom, ".dummy-section");
    let button = find(&dom, ".dummy-btn");
    let _widget = mount(&dom, Some(section));

    let before = dom.class_snapshot();
    assert_eq!(dom.click(button), 1);
    assert_eq!(dom.class_snapshot(), before);
    assert_eq!(
        activate(&*dom, &button, &Selectors::default()),
        Activation::NoGroup
    );
}

#[test]
fn wrapper_without_message_is_a_silent_no_op() {
    let dom = Rc::new(
        MemoryDom::parse(
            r#"<div class="dummy-section"><div class="dummy-wrapper"><button class="dummy-btn"></button></div></div>"#,
        )
        .unwrap(),
    );
    let section = find(&dom, ".dummy-section");
    let button = find(&dom, ".dummy-btn");
    let _widget = mount(&dom, Some(section));

    let before = dom.class_snapshot();
    dom.click(button);
    assert_eq!(dom.class_snapshot(), before);
    assert_eq!(
        activate(&*dom, &button, &Selectors::default()),
        Activation::NoMessage
    );
}

#[test]
fn lookups_stay_inside_the_nearest_wrapper() {
    let dom = Rc::new(MemoryDom::new());
    let section = dom.element(dom.root(), "div", &[SECTION_CLASS]).unwrap();
    let outer = dom.element(section, "div", &[WRAPPER_CLASS]).unwrap();
    let outer_msg = dom.element(outer, "p", &[MESSAGE_CLASS]).unwrap();
    let inner = dom.element(outer, "div", &[WRAPPER_CLASS]).unwrap();
    let inner_btn = dom.element(inner, "button", &[TRIGGER_CLASS]).unwrap();
    let sibling = dom.element(section, "div", &[WRAPPER_CLASS]).unwrap();
    let sibling_btn = dom.element(sibling, "button", &[TRIGGER_CLASS]).unwrap();
    let sibling_msg = dom.element(sibling, "p", &[MESSAGE_CLASS]).unwrap();

    let widget = mount(&dom, Some(section));
    assert_eq!(widget.trigger_count(), 2);

    // inner wrapper has no message of its own; the outer one must stay untouched
    dom.click(inner_btn);
    assert!(!dom.has_class(&outer_msg, VISIBLE_CLASS));
    assert!(!dom.has_class(&sibling_msg, VISIBLE_CLASS));

    dom.click(sibling_btn);
    assert!(dom.has_class(&sibling_msg, VISIBLE_CLASS));
    assert!(!dom.has_class(&outer_msg, VISIBLE_CLASS));
}

#[test]
fn first_message_in_wrapper_is_the_one_toggled() {
    let dom = Rc::new(MemoryDom::new());
    let section = dom.element(dom.root(), "div", &[SECTION_CLASS]).unwrap();
    let wrapper = dom.element(section, "div", &[WRAPPER_CLASS]).unwrap();
    let button = dom.element(wrapper, "button", &[TRIGGER_CLASS]).unwrap();
    let first = dom.element(wrapper, "span", &[MESSAGE_CLASS]).unwrap();
    let second = dom.element(wrapper, "span", &[MESSAGE_CLASS]).unwrap();

    let _widget = mount(&dom, Some(section));
    dom.click(button);
    assert!(dom.has_class(&first, VISIBLE_CLASS));
    assert!(!dom.has_class(&second, VISIBLE_CLASS));
}

#[test]
fn click_on_trigger_child_bubbles_to_the_trigger() {
    let dom = Rc::new(
        MemoryDom::parse(
            r#"<div class="dummy-section"><div class="dummy-wrapper">
                 <button class="dummy-btn"><i class="icon"></i></button>
                 <span class="dummy-msg"></span>
               </div></div>"#,
        )
        .unwrap(),
    );
    let section = find(&dom, ".dummy-section");
    let icon = find(&dom, ".icon");
    let msg = find(&dom, ".dummy-msg");
    let _widget = mount(&dom, Some(section));

    assert_eq!(dom.click(icon), 1);
    assert!(dom.has_class(&msg, VISIBLE_CLASS));
}

#[test]
fn triggers_added_after_construction_are_not_bound() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let section = find(&dom, ".dummy-section");
    let wrapper = find(&dom, ".dummy-wrapper");
    let widget = mount(&dom, Some(section));

    let late = dom.element(wrapper, "button", &[TRIGGER_CLASS]).unwrap();
    assert_eq!(dom.click(late), 0);
    assert_eq!(widget.trigger_count(), 1);
}

#[test]
fn dispose_unbinds_every_listener() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let section = find(&dom, ".dummy-section");
    let button = find(&dom, ".dummy-btn");
    let msg = find(&dom, ".dummy-msg");
    let mut widget = mount(&dom, Some(section));
    assert_eq!(dom.listener_count(), 1);

    widget.dispose();
    assert!(widget.is_disposed());
    assert_eq!(widget.listener_count(), 0);
    assert_eq!(dom.listener_count(), 0);
    assert_eq!(dom.click(button), 0);
    assert!(!dom.has_class(&msg, VISIBLE_CLASS));

    widget.dispose();
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn dropping_the_widget_unbinds() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let section = find(&dom, ".dummy-section");
    {
        let _widget = mount(&dom, Some(section));
        assert_eq!(dom.listener_count(), 1);
    }
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn host_errors_are_swallowed() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let button = find(&dom, ".dummy-btn");
    let selectors = Selectors {
        wrapper_class: "dummy wrapper".to_string(),
        ..Selectors::default()
    };
    let before = dom.class_snapshot();
    assert_eq!(activate(&*dom, &button, &selectors), Activation::Failed);
    assert_eq!(dom.class_snapshot(), before);
}

#[test]
fn failed_trigger_scan_still_constructs() {
    let dom = Rc::new(MemoryDom::parse(SCENARIO).unwrap());
    let section = find(&dom, ".dummy-section");
    let selectors = Selectors {
        trigger_class: "#bad".to_string(),
        ..Selectors::default()
    };
    let widget = ToggleWidget::new(dom.clone(), Some(&section), Rc::new(selectors));
    assert_eq!(widget.trigger_count(), 0);
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn activation_reports_new_visibility() {
    let dom = MemoryDom::parse(SCENARIO).unwrap();
    let button = find(&dom, ".dummy-btn");
    let selectors = Selectors::default();
    assert_eq!(
        activate(&dom, &button, &selectors),
        Activation::Toggled { visible: true }
    );
    assert_eq!(
        activate(&dom, &button, &selectors),
        Activation::Toggled { visible: false }
    );
}
