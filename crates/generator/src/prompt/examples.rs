//! Few-shot example outputs, one set per stack.

pub(crate) struct ExampleSet {
    pub button: &'static str,
    pub styled_button: &'static str,
    pub form: &'static str,
    pub calendar: &'static str,
}

pub(crate) const REACT: ExampleSet = ExampleSet {
    button: r#"import React from 'react';

const MyButton = () => {
  return (
    <div className="flex flex-col items-center justify-center h-screen">
      <button>Click Me!</button>
    </div>
  );
};
export default MyButton;"#,
    styled_button: r#"import React from 'react';

const MyButton = () => {
  return (
    <div className="flex flex-col items-center justify-center h-screen">
      <button className="bg-indigo-500 text-white px-4 py-2 rounded-lg shadow-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-purple-600 focus:ring-opacity-50">Click Me!</button>
    </div>
  );
};
export default MyButton;"#,
    form: r#"import React from 'react';

const MyForm = () => {
  return (
    <div className="flex flex-col items-center justify-center h-screen bg-gray-200">
      <div className="bg-white p-10 rounded-lg shadow-lg">
        <h1 className="text-3xl font-bold mb-4">Contact Us</h1>
        <form className="space-y-6">
          <div>
            <label htmlFor="name" className="block text-gray-800 font-bold mb-2">Name</label>
            <input type="text" id="name" name="name" className="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your name" />
          </div>
          <div>
            <label htmlFor="email" className="block text-gray-800 font-bold mb-2">Email</label>
            <input type="email" id="email" name="email" className="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your email address" />
          </div>
          <div>
            <label htmlFor="message" className="block text-gray-800 font-bold mb-2">Message</label>
            <textarea id="message" name="message" rows="5" className="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your message"></textarea>
          </div>
          <button type="submit" className="w-full bg-indigo-500 text-white p-3 rounded-lg font-bold hover:bg-indigo-700">Send Message</button>
        </form>
      </div>
    </div>
  );
};

export default MyForm;"#,
    calendar: r#"import React from 'react';
import { format, startOfMonth, addDays, isSameMonth } from 'date-fns';

const Calendar = () => {
  const now = new Date();
  const monthStart = startOfMonth(now);
  const days = [];

  let day = monthStart;
  while (day.getDay() !== 0) {
    day = addDays(day, -1);
    days.push(day);
  }

  day = monthStart;
  while (isSameMonth(day, now)) {
    days.push(day);
    day = addDays(day, 1);
  }

  while (days.length % 7 !== 0) {
    days.push(addDays(day, 1));
  }

  return (
    <div className="grid grid-cols-7 gap-2">
      {['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'].map((name) => (
        <div key={name} className="bg-gray-200 p-2 rounded-lg font-bold text-gray-600">{name}</div>
      ))}
      {days.map((d, i) => (
        <div key={i} className={isSameMonth(d, now) ? 'bg-blue-400' : 'bg-gray-100'}>
          {format(d, 'd')}
        </div>
      ))}
    </div>
  );
};

export default Calendar;"#,
};

pub(crate) const MANTINE: ExampleSet = ExampleSet {
    button: r#"import React from 'react';
import { Button, Flex } from '@mantine/core';

const MyButton = () => {
  return (
    <Flex direction="column" justify="center" align="center" h="100vh">
      <Button>Click Me!</Button>
    </Flex>
  );
};
export default MyButton;"#,
    styled_button: r#"import React from 'react';
import { Button, Flex } from '@mantine/core';

const MyButton = () => {
  return (
    <Flex direction="column" justify="center" align="center" h="100vh">
      <Button color="dark" radius="md" size="md">Click Me!</Button>
    </Flex>
  );
};
export default MyButton;"#,
    form: r#"import React from 'react';
import { Button, Paper, Stack, TextInput, Textarea, Title } from '@mantine/core';

const MyForm = () => {
  return (
    <Paper shadow="md" p="xl" radius="md" maw={480} mx="auto">
      <Title order={2} mb="md">Contact Us</Title>
      <form>
        <Stack>
          <TextInput label="Name" placeholder="Enter your name" />
          <TextInput label="Email" type="email" placeholder="Enter your email address" />
          <Textarea label="Message" minRows={5} placeholder="Enter your message" />
          <Button type="submit" fullWidth>Send Message</Button>
        </Stack>
      </form>
    </Paper>
  );
};

export default MyForm;"#,
    calendar: r#"import React from 'react';
import { Flex, Text } from '@mantine/core';
import { Calendar } from '@mantine/dates';

const MyCalendar = () => {
  return (
    <Flex direction="column" justify="center" align="center">
      <Text weight="bold">Hello World</Text>
      <Calendar />
    </Flex>
  );
};

export default MyCalendar;"#,
};

pub(crate) const SVELTE: ExampleSet = ExampleSet {
    button: r#"<script>
</script>

<div class="flex flex-col items-center justify-center h-screen">
  <button class="px-4 py-2 bg-blue-500 text-white rounded-md shadow-md">Click Me!</button>
</div>"#,
    styled_button: r#"<script>
</script>

<div class="flex flex-col items-center justify-center h-screen">
  <button class="bg-indigo-500 text-white px-4 py-2 rounded-lg shadow-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-purple-600 focus:ring-opacity-50">Click Me!</button>
</div>"#,
    form: r#"<script>
</script>

<div class="flex flex-col items-center justify-center h-screen bg-gray-200">
  <div class="bg-white p-10 rounded-lg shadow-lg">
    <h1 class="text-3xl font-bold mb-4">Contact Us</h1>
    <form class="space-y-6">
      <label for="name" class="block text-gray-800 font-bold mb-2">Name</label>
      <input type="text" id="name" name="name" class="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your name"/>
      <label for="email" class="block text-gray-800 font-bold mb-2">Email</label>
      <input type="email" id="email" name="email" class="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your email address"/>
      <label for="message" class="block text-gray-800 font-bold mb-2">Message</label>
      <textarea id="message" name="message" rows="5" class="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your message"></textarea>
      <button type="submit" class="w-full bg-indigo-500 text-white p-3 rounded-lg font-bold hover:bg-indigo-700">Send Message</button>
    </form>
  </div>
</div>"#,
    calendar: r#"<script>
  import { format, startOfMonth, addDays, isSameMonth } from 'date-fns';

  const now = new Date();
  const monthStart = startOfMonth(now);
  const days = [];

  let day = monthStart;
  while (day.getDay() !== 0) {
    day = addDays(day, -1);
    days.push(day);
  }

  day = monthStart;
  while (isSameMonth(day, now)) {
    days.push(day);
    day = addDays(day, 1);
  }

  while (days.length % 7 !== 0) {
    days.push(addDays(day, 1));
  }
</script>

<div class="grid grid-cols-7 gap-2">
  {#each ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'] as name}
    <div class="bg-gray-200 p-2 rounded-lg font-bold text-gray-600">{name}</div>
  {/each}
  {#each days as d}
    <div class={isSameMonth(d, now) ? 'bg-blue-400' : 'bg-gray-100'}>{format(d, 'd')}</div>
  {/each}
</div>"#,
};

pub(crate) const VUE: ExampleSet = ExampleSet {
    button: r#"<template>
  <div class="flex flex-col items-center justify-center h-screen">
    <button>Click Me!</button>
  </div>
</template>

<script>
export default {
  name: 'MyButton'
};
</script>"#,
    styled_button: r#"<template>
  <div class="flex flex-col items-center justify-center h-screen">
    <button class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">Click Me!</button>
  </div>
</template>

<script>
export default {
  name: 'MyButton'
};
</script>"#,
    form: r#"<template>
  <div class="flex flex-col items-center justify-center h-screen bg-gray-200">
    <div class="bg-white p-10 rounded-lg shadow-lg">
      <h1 class="text-3xl font-bold mb-4">Contact Us</h1>
      <form class="space-y-6">
        <label for="name" class="block text-gray-800 font-bold mb-2">Name</label>
        <input type="text" id="name" name="name" class="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your name" />
        <label for="email" class="block text-gray-800 font-bold mb-2">Email</label>
        <input type="email" id="email" name="email" class="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your email address" />
        <label for="message" class="block text-gray-800 font-bold mb-2">Message</label>
        <textarea id="message" name="message" rows="5" class="w-full border border-gray-300 p-2 rounded-lg" placeholder="Enter your message"></textarea>
        <button type="submit" class="w-full bg-indigo-500 text-white p-3 rounded-lg font-bold hover:bg-indigo-700">Send Message</button>
      </form>
    </div>
  </div>
</template>

<script>
export default {
  name: 'MyForm'
};
</script>"#,
    calendar: r#"<template>
  <div class="grid grid-cols-7 gap-2">
    <div v-for="name in names" :key="name" class="bg-gray-200 p-2 rounded-lg font-bold text-gray-600">{{ name }}</div>
    <div v-for="(day, index) in days" :key="index" :class="dayClass(day)">{{ formatDate(day) }}</div>
  </div>
</template>

<script>
import { format, startOfMonth, addDays, isSameMonth } from 'date-fns';

export default {
  name: 'Calendar',
  data() {
    return {
      now: new Date(),
      names: ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'],
      days: []
    };
  },
  methods: {
    formatDate(date) {
      return format(date, 'd');
    },
    dayClass(day) {
      return isSameMonth(day, this.now) ? 'bg-blue-400 p-2 rounded-lg' : 'bg-gray-100 p-2 rounded-lg';
    }
  },
  created() {
    let day = startOfMonth(this.now);
    while (day.getDay() !== 0) {
      day = addDays(day, -1);
      this.days.push(day);
    }
    day = startOfMonth(this.now);
    while (isSameMonth(day, this.now)) {
      this.days.push(day);
      day = addDays(day, 1);
    }
    while (this.days.length % 7 !== 0) {
      this.days.push(addDays(day, 1));
    }
  }
};
</script>"#,
};
