// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use pulse_core::{NoError, Producer, Signal};
use pulse_stream::{IntoStreamExt, MapExt};
use pulse_test_utils::TestError;

#[tokio::test]
async fn test_producer_values_arrive_then_stream_ends() -> anyhow::Result<()> {
    // Arrange
    let producer = Producer::<i32, NoError>::from_values([1, 2, 3]).map(|n| n * 2);

    // Act
    let mut stream = producer.into_stream();
    let mut values = Vec::new();
    while let Some(item) = stream.next().await {
        values.push(item?);
    }

    // Assert
    assert_eq!(values, vec![2, 4, 6]);
    Ok(())
}

#[tokio::test]
async fn test_failure_is_the_last_item() -> anyhow::Result<()> {
    // Arrange
    let (signal, input) = Signal::<i32, TestError>::pipe();
    let mut stream = signal.into_stream();

    // Act
    input.send_next(1);
    input.send_failed(TestError::boom("stream"));

    // Assert
    assert_eq!(stream.next().await, Some(Ok(1)));
    assert_eq!(stream.next().await, Some(Err(TestError::boom("stream"))));
    assert_eq!(stream.next().await, None);
    Ok(())
}

#[tokio::test]
async fn test_values_sent_from_another_task_are_received() -> anyhow::Result<()> {
    // Arrange
    let (signal, input) = Signal::<u32, NoError>::pipe();
    let mut stream = signal.into_stream();

    // Act
    let sender = tokio::spawn(async move {
        for n in 0..5 {
            input.send_next(n);
        }
        input.send_completed();
    });
    sender.await?;

    // Assert
    let mut received = Vec::new();
    while let Some(item) = stream.next().await {
        received.push(item?);
    }
    assert_eq!(received, vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn test_dropping_the_stream_detaches_from_the_signal() -> anyhow::Result<()> {
    // Arrange
    let (signal, _input) = Signal::<i32, NoError>::pipe();
    let stream = signal.into_stream();
    assert_eq!(signal.observer_count(), 1);

    // Act
    drop(stream);

    // Assert
    assert_eq!(signal.observer_count(), 0);
    Ok(())
}

#[test]
fn test_failure_after_stream_dropped_is_discarded() {
    // Arrange
    let (signal, input) = Signal::<i32, TestError>::pipe();
    let stream = signal.into_stream();
    input.send_next(1);

    // Act
    drop(stream);
    input.send_failed(TestError::boom("late"));

    // Assert
    assert!(signal.is_terminated());
    assert_eq!(signal.observer_count(), 0);
}
