use super::*;

#[test]
fn test_cdp_request_serialize() {
    let req = CdpRequest {
        id: 1,
        method: "Page.setDocumentContent".to_string(),
        params: Some(serde_json::json!({"frameId": "F1", "html": "<p>x</p>"})),
        session_id: Some("S1".to_string()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["method"], "Page.setDocumentContent");
    assert_eq!(json["sessionId"], "S1");
    assert_eq!(json["params"]["frameId"], "F1");
}

#[test]
fn test_cdp_request_omits_empty_fields() {
    let req = CdpRequest {
        id: 2,
        method: "Target.createBrowserContext".to_string(),
        params: None,
        session_id: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(!json.contains("params"));
    assert!(!json.contains("sessionId"));
}

#[test]
fn test_cdp_response_deserialize() {
    let json = r#"{"id": 1, "result": {"browserContextId": "abc"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, Some(1));
    assert_eq!(resp.result.unwrap()["browserContextId"], "abc");
}

#[test]
fn test_cdp_event_deserialize() {
    let json = r#"{"method": "Page.loadEventFired", "params": {"timestamp": 1.5}, "sessionId": "S1"}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert!(resp.id.is_none());
    assert_eq!(resp.method.as_deref(), Some("Page.loadEventFired"));
    assert_eq!(resp.session_id.as_deref(), Some("S1"));
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "HeadlessChrome/126.0.6478.126",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "V8-Version": "12.6.228.28",
        "WebKit-Version": "537.36",
        "webSocketDebuggerUrl": "ws://127.0.0.1:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert!(version.browser.starts_with("HeadlessChrome"));
    assert!(version.web_socket_debugger_url.starts_with("ws://"));
}

#[test]
fn test_frame_tree_deserialize() {
    let json = r#"{
        "frame": {"id": "MAIN", "loaderId": "L1", "url": "about:blank", "mimeType": "text/html"},
        "childFrames": [{"frame": {"id": "CHILD", "url": "about:blank"}}]
    }"#;
    let tree: FrameTree = serde_json::from_str(json).unwrap();
    assert_eq!(tree.frame.id, "MAIN");
    assert_eq!(tree.child_frames[0].frame.id, "CHILD");
}

#[test]
fn test_exception_message_prefers_description() {
    let json = r#"{
        "exceptionId": 1,
        "text": "Uncaught",
        "lineNumber": 0,
        "columnNumber": 5,
        "exception": {"type": "object", "subtype": "error", "description": "TypeError: x is null"}
    }"#;
    let details: ExceptionDetails = serde_json::from_str(json).unwrap();
    assert_eq!(details.message(), "TypeError: x is null");
}

#[test]
fn test_device_metrics_serialize() {
    let json = serde_json::to_value(DeviceMetrics::desktop(1280, 800)).unwrap();
    assert_eq!(json["width"], 1280);
    assert_eq!(json["deviceScaleFactor"], 1.0);
    assert_eq!(json["mobile"], false);
}
