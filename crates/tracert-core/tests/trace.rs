use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use test_case::test_case;
use tracert_core::{
    Builder, Fault, HopRecord, Port, ProbeRequest, ProbeResult, Prober, Protocol, TimeToLive,
    TraceStatus,
};

const TARGET: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

/// A simulated network path, mapping each ttl to the host which answers it.
///
/// Ttls beyond the last scripted hop are answered by the target.
struct Topology {
    hops: HashMap<u32, Option<(Ipv4Addr, &'static str)>>,
    len: u32,
    probes: Vec<ProbeRequest>,
}

impl Topology {
    fn new(path: &[Option<(Ipv4Addr, &'static str)>]) -> Self {
        let hops = path
            .iter()
            .enumerate()
            .map(|(i, hop)| (u32::try_from(i).unwrap() + 1, *hop))
            .collect();
        Self {
            hops,
            len: u32::try_from(path.len()).unwrap(),
            probes: vec![],
        }
    }
}

impl Prober for Topology {
    fn probe(&mut self, request: &ProbeRequest) -> ProbeResult {
        self.probes.push(*request);
        let TimeToLive(ttl) = request.ttl;
        let hop = if ttl > self.len {
            Some((request.target_addr, "example.com"))
        } else {
            self.hops[&ttl]
        };
        match hop {
            Some((addr, name)) => {
                ProbeResult::responded(IpAddr::V4(addr), name.to_string(), vec![])
            }
            None => ProbeResult::timeout(vec![Fault::Timeout(request.timeout)]),
        }
    }
}

fn path() -> Vec<Option<(Ipv4Addr, &'static str)>> {
    vec![
        Some((Ipv4Addr::new(192, 168, 1, 1), "router.lan")),
        None,
        Some((Ipv4Addr::new(100, 64, 0, 1), "cgnat.isp.net")),
        Some((Ipv4Addr::new(203, 0, 113, 7), "core1.isp.net")),
    ]
}

fn render(hops: &[HopRecord]) -> Vec<String> {
    hops.iter()
        .map(|hop| {
            format!(
                "{}. {} ({})",
                hop.index(),
                hop.result().address(),
                hop.result().hostname()
            )
        })
        .collect()
}

#[test_case(Protocol::Icmp)]
#[test_case(Protocol::Udp)]
fn test_trace_reaches_target(protocol: Protocol) {
    let mut tracer = Builder::new(TARGET)
        .protocol(protocol)
        .port(Port(20_000))
        .build_with_prober(Topology::new(&path()));
    let mut trace = tracer.trace();
    let hops = trace.by_ref().collect::<Vec<_>>();
    assert!(trace.reached());
    assert_eq!(
        vec![
            "0. 192.168.1.1 (router.lan)",
            "1. * (*)",
            "2. 100.64.0.1 (cgnat.isp.net)",
            "3. 203.0.113.7 (core1.isp.net)",
            "4. 93.184.216.34 (example.com)",
        ],
        render(&hops)
    );
}

#[test]
fn test_protocols_are_structurally_identical() {
    let run = |protocol| {
        let mut tracer = Builder::new(TARGET)
            .protocol(protocol)
            .build_with_prober(Topology::new(&path()));
        let hops = tracer.trace().collect::<Vec<_>>();
        render(&hops)
    };
    assert_eq!(run(Protocol::Icmp), run(Protocol::Udp));
}

#[test_case(1, 1; "single step")]
#[test_case(3, 3; "fewer steps than hops")]
#[test_case(5, 5; "exactly enough steps")]
#[test_case(32, 5; "more steps than hops")]
fn test_trace_length(max_steps: u32, expected: usize) {
    let mut tracer = Builder::new(TARGET)
        .max_steps(max_steps)
        .build_with_prober(Topology::new(&path()));
    let mut trace = tracer.trace();
    let hops = trace.by_ref().collect::<Vec<_>>();
    assert_eq!(expected, hops.len());
    assert!(hops.len() <= max_steps as usize);
    if hops.len() < max_steps as usize {
        assert!(trace.reached());
    }
    for (i, hop) in hops.iter().enumerate() {
        assert_eq!(i, hop.index());
        assert_eq!(TimeToLive(u32::try_from(i).unwrap() + 1), hop.ttl());
    }
    let expected_status = if expected == 5 {
        TraceStatus::Reached
    } else {
        TraceStatus::Exhausted
    };
    assert!(trace.next().is_none());
    assert_eq!(expected_status, trace.status());
}

#[test]
fn test_one_probe_per_hop() {
    let mut tracer = Builder::new(TARGET)
        .protocol(Protocol::Udp)
        .timeout(Duration::from_millis(300))
        .port(Port(31_337))
        .build_with_prober(Topology::new(&path()));
    assert_eq!(5, tracer.trace().count());
    let probes = &tracer.prober().probes;
    assert_eq!(5, probes.len());
    for (i, probe) in probes.iter().enumerate() {
        assert_eq!(TimeToLive(u32::try_from(i).unwrap() + 1), probe.ttl);
        assert_eq!(TARGET, probe.target_addr);
        assert_eq!(Protocol::Udp, probe.protocol);
        assert_eq!(Duration::from_millis(300), probe.timeout);
        assert_eq!(Port(31_337), probe.port);
    }
}
